//! Validate command implementation

use anyhow::Result;
use clap::Args;
use ruleseg_core::PrefixTable;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the abbreviation table to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub prefixes: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating abbreviation table: {}", self.prefixes.display());

        match PrefixTable::from_file(&self.prefixes, None) {
            Ok(table) => {
                println!("✓ Abbreviation table is valid!");
                println!("  Language code: {}", table.metadata.code);
                println!("  Language name: {}", table.metadata.name);
                println!("  General prefixes: {}", table.prefixes.general.len());
                println!(
                    "  Numeric-only prefixes: {}",
                    table.prefixes.numeric_only.len()
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Abbreviation table is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
