//! Configuration module
//!
//! ```toml
//! [processing]
//! language = "es"
//! empty_segments = "drop-empty"
//! prefixes = "my-prefixes.toml"
//!
//! [output]
//! format = "json"
//! trim = true
//!
//! [performance]
//! worker_threads = 4
//! ```

use anyhow::{Context, Result};
use ruleseg_core::EmptySegments;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Embedded abbreviation table, by code or name
    pub language: String,

    /// Empty segment policy
    pub empty_segments: EmptySegments,

    /// External abbreviation table
    pub prefixes: Option<PathBuf>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            empty_segments: EmptySegments::default(),
            prefixes: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Strip surrounding whitespace from each sentence
    pub trim: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            trim: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads for parallel processing (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: CliConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("{}: {}", path.display(), e))
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
