//! segtext command-line entry point

use anyhow::Result;
use clap::Parser;
use segtext_cli::commands::{init_logging, Commands};

/// Insert separators into values for display and strip them back
#[derive(Debug, Parser)]
#[command(name = "segtext", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    cli.command.execute()
}
