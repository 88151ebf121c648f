//! Error types for abbreviation table loading
//!
//! The segmentation pipeline itself cannot fail; only building a resolver
//! from a table can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating an abbreviation table
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Table file could not be read
    #[error("failed to read '{path}': {source}")]
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Table is not valid TOML or does not match the schema
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// File path or embedded table name
        origin: String,
        /// Parser message
        message: String,
    },

    /// Table parsed but its content is unusable
    #[error("invalid abbreviation table: {0}")]
    Invalid(String),

    /// No embedded table for this language code
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::UnsupportedLanguage("xx".to_string());
        assert_eq!(err.to_string(), "language 'xx' not supported");

        let err = ConfigError::Invalid("empty prefix".to_string());
        assert_eq!(err.to_string(), "invalid abbreviation table: empty prefix");

        let err = ConfigError::Parse {
            origin: "table.toml".to_string(),
            message: "missing field `metadata`".to_string(),
        };
        assert!(err.to_string().contains("table.toml"));
        assert!(err.to_string().contains("metadata"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ConfigError::Io {
            path: PathBuf::from("/missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/missing.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
