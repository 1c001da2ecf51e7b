//! Stand-up TUI - collect daily stand-up updates and draft the summary email
//!
//! This library provides the form-state controller for a day's stand-up
//! entries, the summary/email composition, and the terminal UI around them.

pub mod mail;
pub mod session;
pub mod ui;
