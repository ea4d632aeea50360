//! Format command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::ValueSource;
use crate::output::{create_formatter, open_output, OutputFormat};
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Args;
use segtext_engine::{
    parse_delimiter, parse_separator, Color, FormatConfig, FormatConfigBuilder, Segmenter, PRESETS,
};
use std::path::PathBuf;

/// Arguments for the format command
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Values to format (default: read from --input or stdin)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// File with one value per line, `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Built-in preset, replaces the [format] section of the config file
    #[arg(short, long, value_parser = PossibleValuesParser::new(PRESETS.iter().copied()))]
    pub preset: Option<String>,

    /// Template whose separator positions are copied
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Group size counted from the right; with a non-zero --tail it overrides the template
    #[arg(short, long, value_name = "N")]
    pub group: Option<usize>,

    /// Size of the trailing group left whole
    #[arg(long, value_name = "N")]
    pub tail: Option<usize>,

    /// Only format the part wrapped in this character
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Emphasize the segment after the last separator
    #[arg(long, conflicts_with = "no_highlight")]
    pub highlight: bool,

    /// Disable emphasis even if the config enables it
    #[arg(long)]
    pub no_highlight: bool,

    /// Emphasis color: #rrggbb, #rgb or a color name
    #[arg(long, value_name = "COLOR")]
    pub color: Option<Color>,

    /// Separator character to insert
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<String>,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting formatting");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.resolve_config(cli_config.format)?;
        let delimiter = self
            .delimiter
            .as_deref()
            .map(parse_delimiter)
            .transpose()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?
            .flatten();
        let format = self.format.unwrap_or(cli_config.output.default_format);

        log::info!("Formatting with mode {}", config.mode());
        let values = ValueSource::resolve(&self.text, self.input.as_deref()).read_values()?;
        log::debug!("Read {} value(s)", values.len());

        let emphasis_color = config.emphasis_color;
        let segmenter = Segmenter::new(config);
        let writer = open_output(self.output.as_deref())?;
        let mut formatter =
            create_formatter(format, writer, emphasis_color, cli_config.output.pretty_json);

        for value in &values {
            let formatted = segmenter.format_with(value, delimiter);
            formatter.write_entry(&formatted)?;
        }
        formatter.finish()?;

        log::info!("Formatted {} value(s)", values.len());
        Ok(())
    }

    /// Layer preset and flags over the configuration file
    pub fn resolve_config(&self, file_config: FormatConfig) -> Result<FormatConfig> {
        let base = match &self.preset {
            Some(name) => FormatConfig::preset(name)
                .ok_or_else(|| CliError::UnknownPreset(name.clone()))?,
            None => file_config,
        };

        let mut builder = FormatConfigBuilder::from_config(base);
        if let Some(template) = &self.template {
            builder = builder.template(template.clone());
        }
        if let Some(group) = self.group {
            builder = builder.per_group_length(group);
        }
        if let Some(tail) = self.tail {
            builder = builder.last_group_length(tail);
        }
        if self.highlight {
            builder = builder.emphasis(true);
        }
        if self.no_highlight {
            builder = builder.emphasis(false);
        }
        if let Some(color) = self.color {
            builder = builder.emphasis_color(color);
        }
        if let Some(separator) = &self.separator {
            let separator =
                parse_separator(separator).map_err(|e| CliError::InvalidArgument(e.to_string()))?;
            builder = builder.separator(separator);
        }

        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}
