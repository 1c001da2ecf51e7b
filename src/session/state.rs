use super::{Entry, EntryField, EntryId, FormError};
use crate::mail;
use chrono::NaiveDate;
use tracing::debug;

/// Result of a successful [`Session::remove_entry`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry was removed from the session
    Removed(Entry),
    /// The entry is saved; the caller must ask the user and retry with `confirmed = true`
    NeedsConfirmation,
}

/// Form-state controller for one stand-up.
///
/// Owns the selected date and the ordered entry list. The list is never empty
/// and new entries can only be appended once every existing entry is saved.
#[derive(Debug, Clone)]
pub struct Session {
    date: NaiveDate,
    entries: Vec<Entry>,
    roster: Vec<String>,
    next_id: u64,
}

impl Session {
    pub fn new(date: NaiveDate, roster: Vec<String>) -> Self {
        let mut session = Self {
            date,
            entries: Vec::new(),
            roster,
            next_id: 1,
        };
        let id = session.allocate_id();
        session.entries.push(Entry::blank(id));
        session
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        debug!(%date, "date changed");
        self.date = date;
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: a session always holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn saved_entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.saved)
    }

    pub fn all_saved(&self) -> bool {
        self.entries.iter().all(|e| e.saved)
    }

    pub fn any_saved(&self) -> bool {
        self.entries.iter().any(|e| e.saved)
    }

    /// Set the member name or task text of an entry.
    ///
    /// Unknown ids are ignored. Names must come from the roster (or be empty to
    /// clear the selection). A saved entry that loses its name or task drops
    /// back to unsaved.
    pub fn update_entry_field(
        &mut self,
        id: EntryId,
        field: EntryField,
        value: &str,
    ) -> Result<(), FormError> {
        let Some(index) = self.position(id) else {
            debug!(%id, "ignoring update for missing entry");
            return Ok(());
        };

        if field == EntryField::Name && !value.is_empty() && !self.roster.iter().any(|m| m == value)
        {
            return Err(FormError::UnknownMember(value.to_string()));
        }

        let entry = &mut self.entries[index];
        match field {
            EntryField::Name => entry.name = value.to_string(),
            EntryField::Task => entry.task = value.to_string(),
        }
        if entry.saved && !entry.is_complete() {
            entry.saved = false;
        }
        Ok(())
    }

    pub fn save_entry(&mut self, id: EntryId) -> Result<(), FormError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(FormError::EntryNotFound(id))?;

        if !entry.is_complete() {
            return Err(FormError::MissingDetails);
        }

        entry.saved = true;
        debug!(%id, name = %entry.name, "entry saved");
        Ok(())
    }

    pub fn edit_entry(&mut self, id: EntryId) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.saved = false;
            debug!(%id, "entry reopened for editing");
        }
    }

    pub fn add_entry(&mut self) -> Result<EntryId, FormError> {
        if !self.all_saved() {
            return Err(FormError::UnsavedEntries);
        }

        let id = self.allocate_id();
        self.entries.push(Entry::blank(id));
        debug!(%id, count = self.entries.len(), "entry added");
        Ok(id)
    }

    /// Remove an entry.
    ///
    /// Unsaved entries go immediately; saved ones need `confirmed`. The last
    /// remaining entry is never removed.
    pub fn remove_entry(
        &mut self,
        id: EntryId,
        confirmed: bool,
    ) -> Result<RemoveOutcome, FormError> {
        let index = self.position(id).ok_or(FormError::EntryNotFound(id))?;

        if self.entries.len() <= 1 {
            return Err(FormError::LastEntry);
        }

        if self.entries[index].saved && !confirmed {
            return Ok(RemoveOutcome::NeedsConfirmation);
        }

        let removed = self.entries.remove(index);
        debug!(%id, count = self.entries.len(), "entry removed");
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Summary text of all saved entries for the selected date
    pub fn compose_summary(&self, signature: &str) -> String {
        mail::compose_summary(self.date, self.saved_entries(), signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<String> {
        ["Kiran", "Pranav", "Gokul", "Naveen"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    fn session() -> Session {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date");
        Session::new(date, roster())
    }

    fn fill(session: &mut Session, id: EntryId, name: &str, task: &str) {
        session
            .update_entry_field(id, EntryField::Name, name)
            .expect("name");
        session
            .update_entry_field(id, EntryField::Task, task)
            .expect("task");
    }

    #[test]
    fn test_new_session_has_one_blank_entry() {
        let s = session();
        assert_eq!(s.len(), 1);
        assert!(!s.entries()[0].saved);
        assert!(!s.any_saved());
        assert!(!s.all_saved());
    }

    #[test]
    fn test_update_unknown_member_rejected() {
        let mut s = session();
        let id = s.entries()[0].id;
        let err = s
            .update_entry_field(id, EntryField::Name, "Mallory")
            .expect_err("not on roster");
        assert_eq!(err, FormError::UnknownMember("Mallory".to_string()));
        assert_eq!(s.entries()[0].name, "");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut s = session();
        let before = s.entries().to_vec();
        s.update_entry_field(EntryId(99), EntryField::Task, "ghost")
            .expect("no-op");
        assert_eq!(s.entries(), before.as_slice());
    }

    #[test]
    fn test_update_missing_id_skips_roster_check() {
        let mut s = session();
        let before = s.entries().to_vec();
        assert_eq!(
            s.update_entry_field(EntryId(99), EntryField::Name, "Mallory"),
            Ok(())
        );
        assert_eq!(s.entries(), before.as_slice());
    }

    #[test]
    fn test_clearing_saved_entry_reverts_to_unsaved() {
        let mut s = session();
        let id = s.entries()[0].id;
        fill(&mut s, id, "Gokul", "Deploy");
        s.save_entry(id).expect("save");

        s.update_entry_field(id, EntryField::Task, "").expect("clear");
        assert!(!s.entries()[0].saved);
    }

    #[test]
    fn test_save_missing_entry() {
        let mut s = session();
        assert_eq!(
            s.save_entry(EntryId(42)),
            Err(FormError::EntryNotFound(EntryId(42)))
        );
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut s = session();
        let first = s.entries()[0].id;
        fill(&mut s, first, "Kiran", "A");
        s.save_entry(first).expect("save");
        let second = s.add_entry().expect("add");
        s.remove_entry(second, false).expect("remove unsaved");
        let third = s.add_entry().expect("add again");
        assert_ne!(second, third);
        assert!(third > second);
    }

    #[test]
    fn test_remove_saved_needs_confirmation() {
        let mut s = session();
        let first = s.entries()[0].id;
        fill(&mut s, first, "Kiran", "A");
        s.save_entry(first).expect("save");
        s.add_entry().expect("add");

        assert_eq!(
            s.remove_entry(first, false),
            Ok(RemoveOutcome::NeedsConfirmation)
        );
        assert_eq!(s.len(), 2);

        let outcome = s.remove_entry(first, true).expect("confirmed");
        assert!(matches!(outcome, RemoveOutcome::Removed(e) if e.name == "Kiran"));
        assert_eq!(s.len(), 1);
    }
}
