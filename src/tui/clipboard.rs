//! Clipboard helper for copying hrefs to the system clipboard
//!
//! Uses `arboard` for cross-platform support. The clipboard is opened
//! fresh for each copy so nothing is held between key presses.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Fails when there is no display server (headless Linux) or access is denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    tracing::debug!(chars = text.chars().count(), "copied to clipboard");
    Ok(())
}
