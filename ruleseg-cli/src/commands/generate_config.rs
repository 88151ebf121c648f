//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new abbreviation table
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Human-readable language name
    #[arg(short, long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating abbreviation table template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Abbreviation table template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the prefix lists for your language");
        println!("2. Validate your table:");
        println!("   ruleseg validate --prefixes {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   ruleseg process -i input.txt --prefixes {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template table content
    fn generate_template(&self) -> String {
        let code = toml::Value::String(self.language_code.clone());
        let name = toml::Value::String(self.name.clone());

        format!(
            r#"# Non-breaking prefixes for {}
#
# Write every prefix without its trailing period.
# Matching is case-sensitive: list "Mr" and "mr" separately if both occur.

[metadata]
code = {}
name = {}

[prefixes]
# A period after these never ends a sentence
general = [
    # Titles
    "Dr", "Mr", "Mrs", "Ms", "Prof", "Sr", "Jr", "St",
    # Common
    "etc", "vs", "e.g", "i.e", "cf", "approx",
    # Months
    "Jan", "Feb", "Mar", "Apr", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
]

# A period after these ends a sentence unless a number follows (No. 5, pp. 12)
numeric_only = ["No", "Nos", "Art", "pp"]
"#,
            self.language_code, code, name
        )
    }
}
