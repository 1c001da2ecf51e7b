use crate::mail::{Launcher, MailDraft, MailSettings};
use crate::session::{Entry, EntryField, EntryId, RemoveOutcome, Session};
use crate::ui::clipboard;
use crate::ui::theme::Theme;
use chrono::{Days, Local, NaiveDate};
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long the "email opened" banner stays visible
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Format accepted when typing a date
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Form,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes go straight into the selected entry's task text
    EditingTask,
    /// Keystrokes build up a date that is applied on Enter
    EditingDate { buffer: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Blocking message, dismissed with Enter or Esc
    Alert(String),
    /// Deleting a saved entry waits for `y`/`n`
    ConfirmDelete { id: EntryId, name: String },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub expires_at: Instant,
}

pub struct App {
    pub session: Session,
    pub mail: MailSettings,
    pub theme: Theme,
    pub selected_index: usize,
    /// Position within the saved entries shown in the Assigned Tasks pane
    pub assigned_index: usize,
    pub focus: FocusPane,
    pub mode: InputMode,
    pub modal: Option<Modal>,
    pub status: Option<StatusMessage>,
    pub summary_scroll: u16,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, mail: MailSettings, theme: Theme) -> Self {
        Self {
            session,
            mail,
            theme,
            selected_index: 0,
            assigned_index: 0,
            focus: FocusPane::Form,
            mode: InputMode::Normal,
            modal: None,
            status: None,
            summary_scroll: 0,
            should_quit: false,
        }
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.session.entries().get(self.selected_index)
    }

    fn selected_id(&self) -> Option<EntryId> {
        self.selected_entry().map(|e| e.id)
    }

    pub fn next(&mut self) {
        let count = self.session.len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn previous(&mut self) {
        let count = self.session.len();
        if count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = count - 1;
            }
        }
    }

    fn select(&mut self, id: EntryId) {
        if let Some(pos) = self.session.entries().iter().position(|e| e.id == id) {
            self.selected_index = pos;
        }
    }

    fn clamp_selection(&mut self) {
        let last = self.session.len().saturating_sub(1);
        if self.selected_index > last {
            self.selected_index = last;
        }
    }

    // Keep the Assigned Tasks pane consistent after entries were reopened or removed
    fn sync_assigned(&mut self) {
        let saved = self.session.saved_entries().count();
        if saved == 0 {
            self.assigned_index = 0;
            self.summary_scroll = 0;
            self.focus = FocusPane::Form;
            return;
        }
        self.assigned_index = self.assigned_index.min(saved - 1);
        self.summary_scroll = self.summary_scroll.min(self.max_summary_scroll());
    }

    /// The Assigned Tasks pane only takes focus once something is saved
    pub fn toggle_focus(&mut self) {
        self.focus = if self.focus == FocusPane::Form && self.session.any_saved() {
            FocusPane::Summary
        } else {
            FocusPane::Form
        };
    }

    pub fn assigned_entry(&self) -> Option<&Entry> {
        self.session.saved_entries().nth(self.assigned_index)
    }

    pub fn next_assigned(&mut self) {
        let count = self.session.saved_entries().count();
        if count > 0 {
            self.assigned_index = (self.assigned_index + 1) % count;
        }
    }

    pub fn previous_assigned(&mut self) {
        let count = self.session.saved_entries().count();
        if count > 0 {
            self.assigned_index = (self.assigned_index + count - 1) % count;
        }
    }

    /// Reopen the saved entry picked in the Assigned Tasks pane and move to the form
    pub fn edit_assigned(&mut self) {
        let Some(id) = self.assigned_entry().map(|e| e.id) else {
            return;
        };
        self.select(id);
        self.focus = FocusPane::Form;
        self.reopen_selected();
    }

    /// Delete the saved entry picked in the Assigned Tasks pane
    pub fn delete_assigned(&mut self) {
        let Some(id) = self.assigned_entry().map(|e| e.id) else {
            return;
        };
        self.select(id);
        self.request_delete();
    }

    pub fn toggle_help(&mut self) {
        self.modal = match self.modal {
            Some(Modal::Help) => None,
            _ => Some(Modal::Help),
        };
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "alert");
        self.modal = Some(Modal::Alert(message));
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    /// Drop the status message once it has been visible long enough
    pub fn expire_status(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| now >= s.expires_at) {
            self.status = None;
        }
    }

    // Step through "" (no selection) followed by every roster name
    pub fn cycle_member(&mut self, forward: bool) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        if entry.saved {
            self.set_status("Press e to edit a saved entry", StatusKind::Info);
            return;
        }

        let id = entry.id;
        let mut options: Vec<&str> = vec![""];
        options.extend(self.session.roster().iter().map(String::as_str));

        let current = options
            .iter()
            .position(|o| *o == entry.name)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };

        let name = options[next].to_string();
        if let Err(e) = self.session.update_entry_field(id, EntryField::Name, &name) {
            self.show_alert(e.to_string());
        }
    }

    /// Start typing into the selected entry; a saved entry is reopened first
    pub fn begin_task_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        self.session.edit_entry(id);
        self.focus = FocusPane::Form;
        self.mode = InputMode::EditingTask;
        self.sync_assigned();
    }

    pub fn begin_date_edit(&mut self) {
        self.mode = InputMode::EditingDate {
            buffer: self.session.date().format(DATE_INPUT_FORMAT).to_string(),
        };
    }

    pub fn input_char(&mut self, c: char) {
        if self.mode == InputMode::EditingTask {
            self.edit_task(|task| task.push(c));
        } else if let InputMode::EditingDate { buffer } = &mut self.mode {
            buffer.push(c);
        }
    }

    pub fn input_backspace(&mut self) {
        if self.mode == InputMode::EditingTask {
            self.edit_task(|task| {
                task.pop();
            });
        } else if let InputMode::EditingDate { buffer } = &mut self.mode {
            buffer.pop();
        }
    }

    fn edit_task(&mut self, f: impl FnOnce(&mut String)) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        let id = entry.id;
        let mut task = entry.task.clone();
        f(&mut task);
        if let Err(e) = self.session.update_entry_field(id, EntryField::Task, &task) {
            self.show_alert(e.to_string());
        }
    }

    /// Leave input mode, applying a typed date
    pub fn commit_input(&mut self) {
        let mode = std::mem::replace(&mut self.mode, InputMode::Normal);
        if let InputMode::EditingDate { buffer } = mode {
            match NaiveDate::parse_from_str(buffer.trim(), DATE_INPUT_FORMAT) {
                Ok(date) => self.session.set_date(date),
                Err(_) => self.show_alert(format!("Invalid date '{buffer}', use YYYY-MM-DD")),
            }
        }
    }

    /// Leave input mode; task text is already bound live so it is kept
    pub fn cancel_input(&mut self) {
        self.mode = InputMode::Normal;
    }

    pub fn save_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.session.save_entry(id) {
            Ok(()) => self.mode = InputMode::Normal,
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    pub fn reopen_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.session.edit_entry(id);
            self.sync_assigned();
        }
    }

    pub fn add_entry(&mut self) {
        match self.session.add_entry() {
            Ok(id) => {
                self.select(id);
                self.focus = FocusPane::Form;
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    pub fn request_delete(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.session.remove_entry(id, false) {
            Ok(RemoveOutcome::Removed(_)) => {
                self.clamp_selection();
                self.sync_assigned();
            }
            Ok(RemoveOutcome::NeedsConfirmation) => {
                let name = self
                    .session
                    .entry(id)
                    .map(|e| e.name.clone())
                    .unwrap_or_default();
                self.modal = Some(Modal::ConfirmDelete { id, name });
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    pub fn confirm_delete(&mut self) {
        let Some(Modal::ConfirmDelete { id, .. }) = self.modal else {
            return;
        };
        self.modal = None;
        match self.session.remove_entry(id, true) {
            Ok(_) => {
                self.clamp_selection();
                self.sync_assigned();
            }
            Err(e) => self.show_alert(e.to_string()),
        }
    }

    pub fn shift_date(&mut self, forward: bool) {
        let date = self.session.date();
        let shifted = if forward {
            date.checked_add_days(Days::new(1))
        } else {
            date.checked_sub_days(Days::new(1))
        };
        if let Some(d) = shifted {
            self.session.set_date(d);
        }
    }

    pub fn set_date_today(&mut self) {
        self.session.set_date(Local::now().date_naive());
    }

    pub fn summary_text(&self) -> String {
        self.session.compose_summary(&self.mail.signature)
    }

    pub fn scroll_summary_up(&mut self) {
        self.summary_scroll = self.summary_scroll.saturating_sub(1);
    }

    fn max_summary_scroll(&self) -> u16 {
        let lines = self.summary_text().lines().count().saturating_sub(1);
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    pub fn scroll_summary_down(&mut self) {
        if self.summary_scroll < self.max_summary_scroll() {
            self.summary_scroll += 1;
        }
    }

    /// Open the compose page for every saved entry
    pub fn send_mail(&mut self, launcher: &mut dyn Launcher) {
        let draft = match MailDraft::from_session(&self.session, &self.mail) {
            Ok(draft) => draft,
            Err(e) => {
                self.show_alert(e.to_string());
                return;
            }
        };

        match launcher.launch(&draft.compose_url()) {
            Ok(()) => {
                info!(
                    entries = self.session.saved_entries().count(),
                    recipients = draft.to.len(),
                    "mail draft opened"
                );
                if draft.to.is_empty() {
                    warn!("no recipients configured");
                    self.set_status(
                        "Email opened in Gmail! No recipients configured, add them to the config file",
                        StatusKind::Info,
                    );
                } else {
                    self.set_status("Email opened in Gmail!", StatusKind::Success);
                }
            }
            Err(e) => self.show_alert(format!("{e:#}")),
        }
    }

    pub fn copy_summary(&mut self, out: &mut dyn Write) {
        if !self.session.any_saved() {
            self.show_alert("Nothing saved to copy yet");
            return;
        }
        match clipboard::copy(out, &self.summary_text()) {
            Ok(()) => self.set_status("Summary copied to clipboard", StatusKind::Info),
            Err(e) => self.show_alert(format!("{e:#}")),
        }
    }
}
