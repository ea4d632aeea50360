//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use segtext_engine::{FormatConfig, PRESETS};

pub mod format;
pub mod generate_config;
pub mod strip;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert separators into values for display
    Format(format::FormatArgs),

    /// Remove separators or delimiters to recover the canonical value
    Strip(strip::StripArgs),

    /// Write a commented configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in formatting presets
    Presets,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Format(args) => args.execute(),
            Commands::Strip(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

impl ListCommands {
    /// Run the list subcommand
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Presets => {
                for line in preset_lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

fn preset_lines() -> Vec<String> {
    PRESETS
        .iter()
        .filter_map(|name| FormatConfig::preset(name).map(|config| (name, config)))
        .map(|(name, config)| {
            let emphasis = if config.emphasis_enabled {
                format!(", emphasis {}", config.emphasis_color)
            } else {
                String::new()
            };
            format!("{name:<14} {}{emphasis}", config.mode())
        })
        .collect()
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` still takes precedence over the level picked here.
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_command_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Presets,
        };
        let debug_str = format!("{list_cmd:?}");
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Presets"));
    }

    #[test]
    fn test_preset_lines_cover_every_preset() {
        let lines = preset_lines();
        assert_eq!(lines.len(), PRESETS.len());
        assert!(lines[0].starts_with("plain"));
        assert!(lines[0].contains("grammar(none)"));
        assert!(lines
            .iter()
            .any(|line| line.starts_with("card-number")
                && line.contains("per-group(group=4, tail=4)")
                && line.contains("emphasis #ff0000")));
    }
}
