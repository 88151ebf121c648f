//! Where the abbreviation table comes from

use crate::commands::process::Language;
use ruleseg_core::NonBreakerConfig;
use std::path::PathBuf;

/// Source of non-breaking prefixes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrefixSource {
    /// Embedded table, by code or name
    BuiltIn(String),
    /// External table file
    External(PathBuf),
}

impl PrefixSource {
    /// Get the display name for the prefix source
    pub fn display_name(&self) -> String {
        match self {
            PrefixSource::BuiltIn(code) => format!("Built-in: {code}"),
            PrefixSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Resolver configuration for the core segmenter
    pub fn to_config(&self) -> NonBreakerConfig {
        match self {
            PrefixSource::BuiltIn(code) => NonBreakerConfig {
                language: code.clone(),
                prefixes: None,
            },
            PrefixSource::External(path) => NonBreakerConfig {
                prefixes: Some(path.clone()),
                ..NonBreakerConfig::default()
            },
        }
    }
}

impl From<Language> for PrefixSource {
    fn from(language: Language) -> Self {
        PrefixSource::BuiltIn(language.code().to_string())
    }
}

impl Language {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::Basque => "Basque",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Basque => "eu",
        }
    }
}
