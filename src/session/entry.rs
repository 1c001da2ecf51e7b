use std::fmt;

/// Session-scoped identifier of an [`Entry`].
///
/// Identifiers are handed out by the owning [`Session`](super::Session) from a
/// monotonically increasing counter, so a removed entry's id is never seen again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub(crate) u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which editable part of an entry a field update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Name,
    Task,
}

/// One team member's task record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    /// Team member name, empty until one is picked from the roster
    pub name: String,
    /// Free-text task, update or blocker
    pub task: String,
    /// Saved entries are finalized and included in the summary
    pub saved: bool,
}

impl Entry {
    pub(crate) fn blank(id: EntryId) -> Self {
        Self {
            id,
            name: String::new(),
            task: String::new(),
            saved: false,
        }
    }

    /// True when both the member name and the task text carry content
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.task.trim().is_empty()
    }

    /// Label used in lists before a member has been picked
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Select Team Member"
        } else {
            &self.name
        }
    }
}
