//! ANSI terminal output formatter
//!
//! Paints the emphasized range in bold with a 24-bit foreground color and
//! leaves the rest of the line in the default style.

use super::OutputFormatter;
use anyhow::Result;
use segtext_engine::{Color, Formatted};
use std::io::Write;

const RESET: &str = "\x1b[0m";

/// ANSI formatter - outputs one painted value per line
pub struct AnsiFormatter<W: Write> {
    writer: W,
    color: Color,
}

impl<W: Write> AnsiFormatter<W> {
    /// Create a new ANSI formatter painting with `color`
    pub fn new(writer: W, color: Color) -> Self {
        Self { writer, color }
    }

    fn style(&self) -> String {
        format!(
            "\x1b[1;38;2;{};{};{}m",
            self.color.r, self.color.g, self.color.b
        )
    }
}

impl<W: Write> OutputFormatter for AnsiFormatter<W> {
    fn write_entry(&mut self, formatted: &Formatted) -> Result<()> {
        let (before, highlighted, after) = formatted.split_highlight();
        if highlighted.is_empty() {
            writeln!(self.writer, "{before}")?;
        } else {
            let style = self.style();
            writeln!(self.writer, "{before}{style}{highlighted}{RESET}{after}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
