//! Abbreviation table schema
//!
//! ```toml
//! [metadata]
//! code = "en"
//! name = "English"
//!
//! [prefixes]
//! general = ["Mr", "Mrs", "Dr"]
//! numeric_only = ["No", "pp"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Root of an abbreviation table file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    pub metadata: TableMetadata,
    #[serde(default)]
    pub prefixes: Prefixes,
}

/// Table metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub code: String,
    pub name: String,
}

/// Non-breaking prefixes, written without their trailing period
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefixes {
    /// Never end a sentence (`Mr.`, `Dr.`)
    #[serde(default)]
    pub general: Vec<String>,
    /// Do not end a sentence when a number follows (`No. 5`, `pp. 12`)
    #[serde(default)]
    pub numeric_only: Vec<String>,
}

impl PrefixTable {
    /// Table without any prefixes
    pub fn empty(code: &str) -> Self {
        Self {
            metadata: TableMetadata {
                code: code.to_string(),
                name: code.to_string(),
            },
            prefixes: Prefixes::default(),
        }
    }

    /// Parse and validate a table from TOML source
    pub fn from_toml(source: &str, origin: &str) -> Result<Self> {
        let table: PrefixTable = toml::from_str(source).map_err(|e| ConfigError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        table.validate()?;
        Ok(table)
    }

    /// Load and validate a table file, optionally overriding its language code
    pub fn from_file(path: &Path, language_code: Option<&str>) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut table = Self::from_toml(&content, &path.display().to_string())?;

        if let Some(code) = language_code {
            table.metadata.code = code.to_string();
        }

        log::debug!(
            "loaded abbreviation table '{}' from {} ({} general, {} numeric-only)",
            table.metadata.code,
            path.display(),
            table.prefixes.general.len(),
            table.prefixes.numeric_only.len()
        );

        Ok(table)
    }

    /// Check the table for entries the resolver cannot match
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ConfigError::Invalid("language code is empty".to_string()));
        }

        let entries = self
            .prefixes
            .general
            .iter()
            .map(|p| ("general", p))
            .chain(self.prefixes.numeric_only.iter().map(|p| ("numeric_only", p)));

        for (category, prefix) in entries {
            if prefix.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "empty entry in [prefixes].{category}"
                )));
            }
            if prefix.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "entry '{prefix}' in [prefixes].{category} contains whitespace"
                )));
            }
            if prefix.chars().all(|c| c == '.') {
                return Err(ConfigError::Invalid(format!(
                    "entry '{prefix}' in [prefixes].{category} has no letters"
                )));
            }
        }

        Ok(())
    }

    /// Total number of prefixes in the table
    pub fn len(&self) -> usize {
        self.prefixes.general.len() + self.prefixes.numeric_only.len()
    }

    /// True if the table holds no prefixes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
