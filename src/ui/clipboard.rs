//! Clipboard export over OSC 52.
//!
//! The terminal emulator owns the system clipboard, so the text is sent as an
//! escape sequence with a base64 payload. Works over SSH and inside tmux
//! (with `set-clipboard on`), no platform clipboard crate needed.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::io::Write;

/// Escape sequence that asks the terminal to put `text` on the clipboard
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

pub fn copy(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())
        .context("Failed to write clipboard sequence")?;
    out.flush().context("Failed to flush clipboard sequence")?;
    Ok(())
}
