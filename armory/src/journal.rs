//! Narration sink shared by the firearms, the decorations and the demo

use embedded_io::{Error as IoError, Write as IoWrite};

use crate::error::{ArmoryError, Result};

/// Ordered lines of narration waiting to be written out
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Journal {
    lines: Vec<String>,
}

impl Journal {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes and returns the pending lines.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// Writes every pending line, newline-terminated, and empties the journal.
    ///
    /// # Errors
    ///
    /// Returns `ArmoryError::Output` with the writer's error kind. Lines
    /// written before the failure are gone from the journal.
    pub fn flush_to<W: IoWrite>(&mut self, out: &mut W) -> Result<()> {
        for line in self.take() {
            write_bytes(out, line.as_bytes())?;
            write_bytes(out, b"\n")?;
        }
        out.flush().map_err(|e| ArmoryError::Output { kind: e.kind() })
    }
}

fn write_bytes<W: IoWrite>(out: &mut W, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes)
        .map_err(|e| ArmoryError::Output { kind: e.kind() })
}
