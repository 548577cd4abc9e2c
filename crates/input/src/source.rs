//! Seed text source: piped stdin, or nothing when run interactively.
//!
//! Keyboard input keeps working after stdin is drained because crossterm is
//! built with `use-dev-tty` and reads keys from the controlling terminal.

use std::io::{self, Read};

use anyhow::{Context, Result};
use crossterm::tty::IsTty;

/// Read all of `reader` as text, replacing invalid UTF-8.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .context("failed to read piped input")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Seed text for this run.
///
/// Returns the whole of stdin when it is a pipe or file, and an empty string
/// when stdin is a terminal (the scene then shows its default banner).
pub fn read_seed_text() -> Result<String> {
    read_seed_from(io::stdin().lock())
}

/// Like [`read_seed_text`], for any stream that can be checked for a terminal.
pub fn read_seed_from<S: IsTty + Read>(stream: S) -> Result<String> {
    if stream.is_tty() {
        return Ok(String::new());
    }
    read_text(stream)
}
