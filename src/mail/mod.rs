//! # Mail Module
//!
//! Turns a [`Session`](crate::session::Session) into the stand-up email.
//!
//! | Piece | Function |
//! |-------|----------|
//! | Body | [`compose_summary`] |
//! | Subject | [`subject`] |
//! | Compose link | [`MailDraft::compose_url`] |
//! | Opening the link | [`Launcher`] / [`BrowserLauncher`] |
//!
//! Sending is fire-and-forget: the draft opens in Gmail's web composer and the
//! user presses send there. Nothing reports back whether it was delivered.

mod draft;
mod launcher;
mod summary;

pub use draft::{MailDraft, MailSettings, COMPOSE_BASE_URL};
pub use launcher::{BrowserLauncher, Launcher, RecordingLauncher};
pub use summary::{compose_summary, format_long_date, subject, DEFAULT_SIGNATURE};
