//! Segmenter configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What to do with empty segments produced by the final split
///
/// A break marker at the very start or end of the finalized text (for
/// example a trailing paragraph) yields an empty segment on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptySegments {
    /// Return every segment, empty ones included
    #[default]
    Keep,
    /// Drop empty segments at the end of the sequence
    DropTrailing,
    /// Drop every segment that is empty or whitespace-only
    DropEmpty,
}

impl EmptySegments {
    /// Apply the policy to a split sequence
    pub fn apply(self, mut segments: Vec<String>) -> Vec<String> {
        match self {
            EmptySegments::Keep => segments,
            EmptySegments::DropTrailing => {
                while segments.last().is_some_and(|s| s.is_empty()) {
                    segments.pop();
                }
                segments
            }
            EmptySegments::DropEmpty => {
                segments.retain(|s| !s.trim().is_empty());
                segments
            }
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptySegments::Keep => "keep",
            EmptySegments::DropTrailing => "drop-trailing",
            EmptySegments::DropEmpty => "drop-empty",
        }
    }
}

/// Which abbreviation table the default resolver is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonBreakerConfig {
    /// Language code of an embedded table (`en`, `es`, `eu`)
    #[serde(default = "default_language")]
    pub language: String,

    /// External table; takes precedence over the embedded one
    #[serde(default)]
    pub prefixes: Option<PathBuf>,
}

impl Default for NonBreakerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            prefixes: None,
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

/// Options applied by the segmenter around the pipeline stages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Empty segment policy for the final split
    #[serde(default)]
    pub empty_segments: EmptySegments,

    /// Resolver selection
    #[serde(default)]
    pub non_breaker: NonBreakerConfig,
}
