//! Natural Language Processing components
//!
//! This module provides sentence segmentation, tokenization, stopword
//! filtering and stemming, all driven by an immutable [`LanguageConfig`].

pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

use crate::types::SummarizerConfig;
use stemmer::Stemmer;
use stopwords::StopwordFilter;

/// Language-specific tokenization rules.
///
/// Passed by value into the [`tokenizer::Tokenizer`]; nothing here is
/// process-global, so independent requests can use different settings
/// concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageConfig {
    /// Language code (e.g., "en")
    pub language: String,
    /// Stopwords removed before counting terms
    pub stopwords: StopwordFilter,
    /// Stemmer applied after stopword removal (None = exact matching)
    pub stemmer: Option<Stemmer>,
    /// Minimum token length in characters
    pub min_token_length: usize,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::new("en")
    }
}

impl LanguageConfig {
    /// Built-in stopwords and stemming for the given language
    pub fn new(language: impl Into<String>) -> Self {
        let language = language.into();
        Self {
            stopwords: StopwordFilter::new(&language),
            stemmer: Stemmer::for_language(&language),
            language,
            min_token_length: 1,
        }
    }

    /// Derive the tokenization rules from a summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let mut stopwords = if config.use_stopwords {
            StopwordFilter::new(&config.language)
        } else {
            StopwordFilter::empty()
        };
        stopwords.add_stopwords(&config.stopwords);

        Self {
            language: config.language.clone(),
            stopwords,
            stemmer: if config.stemming {
                Stemmer::for_language(&config.language)
            } else {
                None
            },
            min_token_length: config.min_token_length,
        }
    }

    /// Disable stopword removal
    pub fn without_stopwords(mut self) -> Self {
        self.stopwords = StopwordFilter::empty();
        self
    }

    /// Disable stemming
    pub fn without_stemming(mut self) -> Self {
        self.stemmer = None;
        self
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }
}
