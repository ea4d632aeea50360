//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use segtext_engine::{Formatted, HighlightRange};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs formatted values as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EntryData {
    /// The value as given
    pub input: String,
    /// The display text
    pub formatted: String,
    /// Character range to emphasize, if any
    pub highlight: Option<HighlightRange>,
    /// Value recovered from the display text
    pub read_back: String,
}

impl From<&Formatted> for EntryData {
    fn from(formatted: &Formatted) -> Self {
        Self {
            input: formatted.raw.clone(),
            formatted: formatted.text.clone(),
            highlight: formatted.highlight,
            read_back: formatted.read_back(),
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_entry(&mut self, formatted: &Formatted) -> Result<()> {
        self.entries.push(EntryData::from(formatted));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
