use super::EntryId;
use thiserror::Error;

/// User-facing input errors raised by form transitions.
///
/// The `Display` text is what the TUI shows in its blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in name and task details")]
    MissingDetails,

    #[error("Please save current member details first")]
    UnsavedEntries,

    #[error("At least one team member entry must remain")]
    LastEntry,

    #[error("No team members to send email to")]
    NothingToSend,

    #[error("'{0}' is not on the team roster")]
    UnknownMember(String),

    #[error("Entry {0} no longer exists")]
    EntryNotFound(EntryId),
}
