//! # UI Module
//!
//! Terminal front end for the stand-up form.
//!
//! ## Components
//!
//! - [`App`] - view state wrapping the [`Session`](crate::session::Session)
//! - [`keys`] - maps key presses to app transitions
//! - [`mod@render`] - draws the frame
//! - [`config`] / [`theme`] - user settings and colours
//! - [`clipboard`] - OSC 52 export of the summary
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           Daily Task Assignment · date           │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │      Selected Entry       │
//! │   Team Member       │  (member, task, state)    │
//! │   Tasks             ├───────────────────────────┤
//! │   (all entries)     │      Assigned Tasks       │
//! │                     │   (summary preview)       │
//! ├─────────────────────┴───────────────────────────┤
//! │              Footer / status banner              │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Alerts, delete confirmations and the help screen are drawn as centered
//! overlays on top of this layout.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod keys;
pub mod render;
pub mod theme;

pub use app::App;
pub use keys::{handle_key, Action};
pub use render::render;
