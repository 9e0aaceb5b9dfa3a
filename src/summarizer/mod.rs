//! Extractive summarization facade
//!
//! [`Summarizer`] runs the request pipeline end to end:
//!
//! 1. tokenize the raw text into a [`Document`]
//! 2. build the term-sentence matrix under the configured weighting
//! 3. score sentences with the selected [`RankingStrategy`]
//! 4. pick the top-N sentences and emit them in document order
//!
//! Every stage consumes the previous one's complete output. Nothing is
//! cached between calls, so one `Summarizer` can serve concurrent requests.

pub mod selector;
pub mod stats;

use crate::errors::Result;
use crate::matrix::TermSentenceMatrix;
use crate::nlp::tokenizer::Tokenizer;
use crate::nlp::LanguageConfig;
use crate::types::{Document, Method, SummarizerConfig};
use crate::variants::{RankingOutcome, RankingStrategy, SentenceRanker};
use selector::SentenceSelector;
use serde::{Deserialize, Serialize};
use stats::{DocumentStats, SummaryMetrics};

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! stage_span {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("summarizer_stage", stage = $name).entered();
    };
}

/// The result of summarizing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences in document order, whitespace collapsed
    pub sentences: Vec<String>,
    /// Size of the input document
    pub stats: DocumentStats,
    /// Ranking method that produced the summary
    pub method: Method,
}

impl Summary {
    /// The summary as one paragraph (sentences joined by a space)
    pub fn joined(&self) -> String {
        self.sentences.join(" ")
    }

    /// Word counts, reading time and reduction for display
    pub fn metrics(&self) -> SummaryMetrics {
        SummaryMetrics::compute(self.stats.word_count, &self.joined())
    }

    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if no sentence was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
}

impl Default for Summarizer {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            tokenizer: Tokenizer::new(LanguageConfig::from_config(&config)),
            config,
        }
    }
}

impl Summarizer {
    /// Create a summarizer; fails with `InvalidConfig` if `config` is invalid
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tokenizer: Tokenizer::new(LanguageConfig::from_config(&config)),
            config,
        })
    }

    /// Use explicit language rules instead of the ones derived from `config`
    pub fn with_language_config(mut self, language: LanguageConfig) -> Self {
        self.tokenizer = Tokenizer::new(language);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize raw text into a document
    pub fn parse(&self, text: &str) -> Result<Document> {
        stage_span!("tokenize");
        let document = self.tokenizer.tokenize(text)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = document.sentence_count(), "parsed document");

        Ok(document)
    }

    /// Score every sentence of a parsed document.
    ///
    /// `sentence_count` is the requested summary length; LSA uses it as the
    /// topic count unless the config fixes one.
    pub fn rank(
        &self,
        document: &Document,
        method: Method,
        sentence_count: usize,
    ) -> RankingOutcome {
        let matrix = {
            stage_span!("weight");
            TermSentenceMatrix::build(document, self.config.weighting)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            terms = matrix.num_terms(),
            sentences = matrix.num_sentences(),
            weighting = ?matrix.scheme(),
            "built term-sentence matrix"
        );

        stage_span!("rank");
        let strategy = RankingStrategy::from_config(method, &self.config, sentence_count.max(1));
        let outcome = strategy.rank(document, &matrix);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            %method,
            iterations = outcome.iterations,
            delta = outcome.delta,
            converged = outcome.converged,
            topics = ?outcome.topics,
            "ranked sentences"
        );

        outcome
    }

    /// Summarize `text` with `method`, keeping `sentence_count` sentences.
    ///
    /// Fails with `EmptyInput` when the text has no sentences. A count of 0
    /// selects one sentence; a count above the sentence total selects all.
    pub fn summarize(
        &self,
        text: &str,
        method: Method,
        sentence_count: usize,
    ) -> Result<Summary> {
        let document = self.parse(text)?;
        let outcome = self.rank(&document, method, sentence_count);

        stage_span!("select");
        let sentences = SentenceSelector::select(&document, &outcome.scores, sentence_count)?
            .into_iter()
            .map(|sentence| sentence.display_text())
            .collect();

        Ok(Summary {
            sentences,
            stats: DocumentStats::new(text, &document),
            method,
        })
    }
}

/// Summarize `raw_text` with the default configuration
pub fn summarize_text(raw_text: &str, method: Method, sentence_count: usize) -> Result<Summary> {
    Summarizer::default().summarize(raw_text, method, sentence_count)
}
