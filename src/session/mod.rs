//! # Session Module
//!
//! The form-state controller behind the stand-up form.
//!
//! ## Lifecycle
//!
//! ```text
//!   add_entry ──▶ [unsaved] ──save_entry──▶ [saved]
//!                    ▲   │                     │
//!                    │   └──remove_entry──▶ ✕  │ remove_entry(confirmed)
//!                    └──────edit_entry─────────┤
//!                                              ▼
//!                                              ✕
//! ```
//!
//! - A [`Session`] always holds at least one [`Entry`]
//! - New entries can only be added when every entry is saved
//! - [`EntryId`]s are never reused within a session
//!
//! Failed transitions return a [`FormError`] whose message is meant to be
//! shown to the user as-is.

mod entry;
mod error;
mod state;

pub use entry::{Entry, EntryField, EntryId};
pub use error::FormError;
pub use state::{RemoveOutcome, Session};
