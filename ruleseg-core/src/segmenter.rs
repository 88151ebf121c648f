//! Segmentation pipeline
//!
//! normalize → boundary rules → non-breaker → finalize

use std::path::PathBuf;
use std::sync::{Arc, LazyLock};

use crate::config::{EmptySegments, NonBreakerConfig, SegmenterConfig};
use crate::error::Result;
use crate::finalizer::finalize;
use crate::nonbreaker::{NonBreaker, PrefixNonBreaker, PrefixTable};
use crate::normalizer::normalize;
use crate::rules::apply_rules;

/// Splits text into sentences
///
/// A segmenter holds no per-call state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Segmenter {
    non_breaker: Arc<dyn NonBreaker>,
    config: SegmenterConfig,
}

impl Segmenter {
    /// Segmenter with the embedded English abbreviation table
    pub fn new() -> Result<Self> {
        Self::with_config(SegmenterConfig::default())
    }

    /// Segmenter with the embedded table for `code`
    pub fn with_language(code: &str) -> Result<Self> {
        Self::builder().language(code).build()
    }

    /// Segmenter built from a full configuration
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        let non_breaker = PrefixNonBreaker::from_config(&config.non_breaker)?;
        Ok(Self {
            non_breaker: Arc::new(non_breaker),
            config,
        })
    }

    /// Segmenter using a caller-supplied resolver
    pub fn with_non_breaker(non_breaker: impl NonBreaker + 'static) -> Self {
        Self {
            non_breaker: Arc::new(non_breaker),
            config: SegmenterConfig::default(),
        }
    }

    /// Create a builder
    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    /// Current configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split `text` into sentences, in input order
    pub fn segment(&self, text: &str) -> Vec<String> {
        let unit = normalize(text);
        let unit = apply_rules(unit);
        let unit = self.non_breaker.resolve(unit);
        finalize(&unit, self.config.empty_segments)
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        match Self::new() {
            Ok(segmenter) => segmenter,
            Err(e) => {
                log::warn!("falling back to an empty abbreviation table: {e}");
                Self::with_non_breaker(PrefixNonBreaker::new(&PrefixTable::empty("en")))
            }
        }
    }
}

/// Builder for [`Segmenter`]
#[derive(Debug, Default)]
pub struct SegmenterBuilder {
    config: SegmenterConfig,
    non_breaker: Option<Arc<dyn NonBreaker>>,
}

impl SegmenterBuilder {
    /// Select an embedded abbreviation table
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.config.non_breaker.language = code.into();
        self
    }

    /// Load the abbreviation table from a file instead
    pub fn prefixes(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.non_breaker.prefixes = Some(path.into());
        self
    }

    /// Resolver selection as a whole
    pub fn non_breaker_config(mut self, config: NonBreakerConfig) -> Self {
        self.config.non_breaker = config;
        self
    }

    /// Use a caller-supplied resolver; table settings are then ignored
    pub fn non_breaker(mut self, non_breaker: impl NonBreaker + 'static) -> Self {
        self.non_breaker = Some(Arc::new(non_breaker));
        self
    }

    /// Set the empty segment policy
    pub fn empty_segments(mut self, policy: EmptySegments) -> Self {
        self.config.empty_segments = policy;
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<Segmenter> {
        let non_breaker = match self.non_breaker {
            Some(non_breaker) => non_breaker,
            None => Arc::new(PrefixNonBreaker::from_config(&self.config.non_breaker)?),
        };

        Ok(Segmenter {
            non_breaker,
            config: self.config,
        })
    }
}

static DEFAULT: LazyLock<Segmenter> = LazyLock::new(Segmenter::default);

/// Split `text` into sentences with the default English segmenter
pub fn segment(text: &str) -> Vec<String> {
    DEFAULT.segment(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonbreaker::KeepBreaks;

    #[test]
    fn test_quote_boundary() {
        let sentences = Segmenter::with_non_breaker(KeepBreaks)
            .segment("He said \"Stop!\" Then he left.");
        assert_eq!(sentences, vec!["He said \"Stop!\" ", "Then he left."]);
    }

    #[test]
    fn test_abbreviation_suppression() {
        let sentences = segment("Mr. Smith arrived. He left.");
        assert_eq!(sentences, vec!["Mr. Smith arrived. ", "He left."]);
    }

    #[test]
    fn test_ellipsis_mid_sentence() {
        assert_eq!(segment("Wait... she said"), vec!["Wait... she said"]);
    }

    #[test]
    fn test_link() {
        let sentences = segment("See more. http://example.com");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[1].starts_with("http://example.com"));
    }

    #[test]
    fn test_builder_policy() {
        let segmenter = Segmenter::builder()
            .empty_segments(EmptySegments::DropTrailing)
            .build()
            .unwrap();
        assert_eq!(segmenter.segment("Done.\n\n"), vec!["Done."]);

        let keep = Segmenter::new().unwrap();
        assert_eq!(keep.segment("Done.\n\n"), vec!["Done.", ""]);
    }

    #[test]
    fn test_builder_custom_non_breaker_wins() {
        let segmenter = Segmenter::builder()
            .language("does-not-exist")
            .non_breaker(KeepBreaks)
            .build()
            .unwrap();
        assert_eq!(segmenter.segment("One. Two."), vec!["One. Two."]);
    }

    #[test]
    fn test_unknown_language_fails_to_build() {
        assert!(Segmenter::with_language("zz").is_err());
    }

    #[test]
    fn test_segmenter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Segmenter>();
    }
}
