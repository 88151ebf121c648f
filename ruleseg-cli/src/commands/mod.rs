//! CLI command implementations

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use ruleseg_core::nonbreaker::{get_table, list_languages};

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into sentences
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an abbreviation table
    Validate(validate::ValidateArgs),

    /// Generate an abbreviation table template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in abbreviation tables
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in list_languages() {
                    let table = get_table(code)?;
                    println!("  {:<4} {}", code, table.metadata.name);
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                for format in process::OutputFormat::value_variants() {
                    println!("  {:<10} {}", format.as_str(), format.description());
                }
            }
        }
        Ok(())
    }
}
