//! Output formatting module

use anyhow::{Context, Result};
use segtext_engine::{Color, Formatted};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single formatted value
    fn write_entry(&mut self, formatted: &Formatted) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod ansi;
pub mod json;
pub mod text;

pub use ansi::AnsiFormatter;
pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain formatted text, one value per line
    #[default]
    Text,
    /// JSON array with highlight ranges
    Json,
    /// Terminal text with the trailing segment painted
    Ansi,
}

/// Open the output destination: the given file, or stdout when `None`
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    emphasis_color: Color,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Ansi => Box::new(AnsiFormatter::new(writer, emphasis_color)),
    }
}
