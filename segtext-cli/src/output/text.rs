//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use segtext_engine::Formatted;
use std::io::Write;

/// Plain text formatter - outputs one formatted value per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_entry(&mut self, formatted: &Formatted) -> Result<()> {
        writeln!(self.writer, "{}", formatted.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
