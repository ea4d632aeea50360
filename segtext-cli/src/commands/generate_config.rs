//! Generate config command implementation

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::Args;
use segtext_engine::{FormatConfig, PRESETS};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Preset to start from
    #[arg(short, long, default_value = "card-number",
          value_parser = PossibleValuesParser::new(PRESETS.iter().copied()))]
    pub preset: String,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let config = FormatConfig::preset(&self.preset)
            .ok_or_else(|| crate::CliError::UnknownPreset(self.preset.clone()))?;

        println!("Generating configuration template...");
        println!("  Preset: {}", self.preset);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template(&self.preset, &config))
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Use it for formatting:");
        println!("   segtext format -c {} 4111111111111111", self.output.display());

        Ok(())
    }
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

/// Render a commented configuration file for `config`
pub fn generate_template(preset: &str, config: &FormatConfig) -> String {
    let template_line = match &config.template {
        Some(template) => format!("template = {}", toml_string(template)),
        None => "# template = \"1111 2222 3333 4444\"".to_string(),
    };

    format!(
        r##"# segtext configuration, generated from the "{preset}" preset

[format]
# Separators are inserted wherever this template has one.
# Ignored while both group lengths below are non-zero.
{template_line}

# Split into groups of per_group_length counted from the right,
# leaving the last last_group_length characters as one group.
per_group_length = {per_group}
last_group_length = {last_group}

# Emphasize the segment after the last separator.
# Colors: "#rrggbb", "#rgb" or a name such as "red".
emphasis_enabled = {emphasis}
emphasis_color = "{color}"

# Character inserted between groups
separator = {separator}

[output]
# One of "text", "json", "ansi"
default_format = "text"
pretty_json = true
"##,
        per_group = config.per_group_length,
        last_group = config.last_group_length,
        emphasis = config.emphasis_enabled,
        color = config.emphasis_color,
        separator = toml_string(&config.separator.to_string()),
    )
}
