//! Strip command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::ValueSource;
use crate::output::open_output;
use anyhow::Result;
use clap::Args;
use segtext_engine::{parse_delimiter, parse_separator, FormatConfig, Segmenter};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the strip command
#[derive(Debug, Args)]
pub struct StripArgs {
    /// Displayed values to strip (default: read from --input or stdin)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// File with one value per line, `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file supplying the separator
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Remove the first and last occurrence of this character instead of separators
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Separator character to remove
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<String>,
}

impl StripArgs {
    /// Execute the strip command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let segmenter = Segmenter::new(self.resolve_config()?);
        let delimiter = match self.delimiter.as_deref() {
            Some(value) => {
                parse_delimiter(value).map_err(|e| CliError::InvalidArgument(e.to_string()))?
            }
            None => None,
        };

        let values = ValueSource::resolve(&self.text, self.input.as_deref()).read_values()?;
        let mut writer = open_output(self.output.as_deref())?;
        for value in &values {
            let stripped = match delimiter {
                Some(delimiter) => segmenter.strip_delimited(value, delimiter),
                None => segmenter.strip_separators(value),
            };
            writeln!(writer, "{stripped}")?;
        }
        writer.flush()?;

        log::info!("Stripped {} value(s)", values.len());
        Ok(())
    }

    fn resolve_config(&self) -> Result<FormatConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::load(path)?.format,
            None => FormatConfig::default(),
        };
        if let Some(separator) = &self.separator {
            config.separator =
                parse_separator(separator).map_err(|e| CliError::InvalidArgument(e.to_string()))?;
        }
        Ok(config)
    }
}
