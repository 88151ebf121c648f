//! Output formatting module

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the sentences of a new input document
    fn begin_source(&mut self, source: &str) -> Result<()>;

    /// Format and output a single sentence; `index` counts from 0 per document
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
