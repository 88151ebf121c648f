//! ruleseg command-line entry point

use anyhow::Result;
use clap::Parser;
use ruleseg_cli::commands::Commands;

/// Rule-based sentence segmentation
#[derive(Debug, Parser)]
#[command(name = "ruleseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
