//! Non-breaker gateway
//!
//! After the boundary rules have run, the marked text is handed to a
//! resolver that knows about abbreviations and initials. It may drop break
//! markers the rules placed after a non-terminal period and may add breaks
//! of its own. The pipeline does not inspect what comes back.
//!
//! Resolvers are plain capabilities: anything implementing [`NonBreaker`],
//! including closures of type `Fn(String) -> String`.

mod loader;
mod prefix;
mod table;

pub use loader::{get_table, list_languages};
pub use prefix::PrefixNonBreaker;
pub use table::{PrefixTable, Prefixes, TableMetadata};

use std::fmt;

/// Resolves false and missing sentence breaks in a marked text unit
pub trait NonBreaker: Send + Sync {
    /// Return the text with break markers removed or added
    fn resolve(&self, text: String) -> String;
}

impl<F> NonBreaker for F
where
    F: Fn(String) -> String + Send + Sync,
{
    fn resolve(&self, text: String) -> String {
        self(text)
    }
}

/// Resolver that returns its input untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepBreaks;

impl NonBreaker for KeepBreaks {
    fn resolve(&self, text: String) -> String {
        text
    }
}

impl fmt::Debug for dyn NonBreaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NonBreaker(...)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_breaks_is_identity() {
        let text = "One.\nTwo.\u{2029}Three".to_string();
        assert_eq!(KeepBreaks.resolve(text.clone()), text);
    }

    #[test]
    fn test_closure_is_a_resolver() {
        let strip = |text: String| text.replace('\n', "");
        assert_eq!(strip.resolve("a\nb".to_string()), "ab");
    }

    #[test]
    fn test_boxed_resolver() {
        let resolvers: Vec<Box<dyn NonBreaker>> = vec![
            Box::new(KeepBreaks),
            Box::new(|text: String| text.to_uppercase()),
        ];
        let out: Vec<_> = resolvers
            .iter()
            .map(|r| r.resolve("x".to_string()))
            .collect();
        assert_eq!(out, ["x", "X"]);
    }
}
