//! Rule-based sentence segmentation
//!
//! Text goes through four stages, each taking and returning a text unit:
//!
//! 1. **Normalizer**: native line breaks become placeholders, doubled ones
//!    become paragraph markers and single ones become spaces.
//! 2. **Boundary rules**: an ordered table of patterns inserts a break
//!    marker before every detected sentence start.
//! 3. **Non-breaker**: a pluggable resolver removes breaks placed after
//!    abbreviations and initials and decides plain `. Upper` periods.
//! 4. **Finalizer**: drops paragraph markers that were only line wraps,
//!    turns the rest into breaks and splits on breaks.
//!
//! No stage can fail. Ambiguous boundaries are left unsplit.
//!
//! # Example
//!
//! ```rust
//! use ruleseg_core::{EmptySegments, Segmenter};
//!
//! let segmenter = Segmenter::builder()
//!     .language("en")
//!     .empty_segments(EmptySegments::DropEmpty)
//!     .build()
//!     .unwrap();
//!
//! let sentences = segmenter.segment("Mr. Smith arrived. He left.");
//! assert_eq!(sentences.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod finalizer;
pub mod markers;
pub mod nonbreaker;
pub mod normalizer;
pub mod rules;
pub mod segmenter;

pub use config::{EmptySegments, NonBreakerConfig, SegmenterConfig};
pub use error::{ConfigError, Result};
pub use nonbreaker::{KeepBreaks, NonBreaker, PrefixNonBreaker, PrefixTable};
pub use segmenter::{segment, Segmenter, SegmenterBuilder};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stages_compose_like_segment() {
        let text = "First line\nwraps here. Second one!\n\nNew paragraph.";

        let unit = normalizer::normalize(text);
        let unit = rules::apply_rules(unit);
        let unit = KeepBreaks.resolve(unit);
        let manual = finalizer::finalize(&unit, EmptySegments::Keep);

        let via_segmenter = Segmenter::with_non_breaker(KeepBreaks).segment(text);
        assert_eq!(manual, via_segmenter);
    }

    #[test]
    fn test_public_exports() {
        let _config = SegmenterConfig::default();
        let _policy = EmptySegments::Keep;
        let _table = PrefixTable::empty("en");
        let _rules = rules::rules();
        assert_eq!(rules::RULE_COUNT, _rules.len());
    }
}
