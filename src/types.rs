//! Core types for rapid_summarizer
//!
//! This module defines the request-scoped data model (tokens, sentences,
//! documents, score vectors) and the summarizer configuration.

use crate::errors::{Result, SummarizerError};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Token
// ============================================================================

/// A normalized word occurrence inside a sentence.
///
/// Tokens are plain values: two sentences containing the same word each own
/// their own `Token` with an equal `term`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The surface form as it appears in the source text
    pub text: String,
    /// The normalized term (lowercased, optionally stemmed)
    pub term: String,
    /// Byte offset (start) in the original text
    pub start: usize,
    /// Byte offset (end) in the original text
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, term: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            term: term.into(),
            start,
            end,
        }
    }
}

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The verbatim sentence text (trimmed)
    pub text: String,
    /// Start byte offset in original text
    pub start: usize,
    /// End byte offset in original text
    pub end: usize,
    /// Sentence index within the document
    pub index: usize,
    /// Normalized tokens in sentence order (stopwords already removed)
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// Create a new sentence without tokens
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
            tokens: Vec::new(),
        }
    }

    /// Iterate over the normalized terms of this sentence
    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(|t| t.term.as_str())
    }

    /// Number of normalized tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of occurrences of `term` in this sentence
    pub fn term_count(&self, term: &str) -> usize {
        self.tokens.iter().filter(|t| t.term == term).count()
    }

    /// The sentence text with every whitespace run collapsed to one space.
    ///
    /// Hard-wrapped input keeps its line breaks in `text`; this is the form
    /// returned to callers.
    pub fn display_text(&self) -> String {
        self.text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

// ============================================================================
// Document
// ============================================================================

/// A parsed document: an ordered, immutable sequence of sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sentences in document order
    sentences: Vec<Sentence>,
    /// Language code used for tokenization rules
    language: String,
}

impl Document {
    /// Create a document from already-indexed sentences
    pub fn new(sentences: Vec<Sentence>, language: impl Into<String>) -> Self {
        Self {
            sentences,
            language: language.into(),
        }
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Get a sentence by index
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Number of sentences
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Check if the document has no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Language code of the tokenization rules
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Distinct terms across the document, sorted lexicographically
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut terms: Vec<&str> = self.sentences.iter().flat_map(|s| s.terms()).collect();
        terms.sort_unstable();
        terms.dedup();
        terms
    }
}

// ============================================================================
// Score Vector
// ============================================================================

/// Importance score per sentence, indexed by sentence position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector(Vec<f64>);

impl ScoreVector {
    /// Wrap raw scores
    pub fn new(scores: Vec<f64>) -> Self {
        Self(scores)
    }

    /// Score of a sentence (0.0 when out of range)
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    /// Number of scored sentences
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no scores
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw scores
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Sentence indices ordered by descending score.
    ///
    /// Equal scores keep document order, so the ordering is total and
    /// deterministic. NaN scores sort last.
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.0.len()).collect();
        indices.sort_by(|&a, &b| {
            let (sa, sb) = (self.0[a], self.0[b]);
            match (sa.is_nan(), sb.is_nan()) {
                (true, true) => a.cmp(&b),
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => sb.total_cmp(&sa).then(a.cmp(&b)),
            }
        });
        indices
    }
}

impl From<Vec<f64>> for ScoreVector {
    fn from(scores: Vec<f64>) -> Self {
        Self(scores)
    }
}

// ============================================================================
// Method & Weighting
// ============================================================================

/// Sentence ranking algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Latent Semantic Analysis (SVD of the term-sentence matrix)
    #[default]
    Lsa,
    /// LexRank (thresholded TF-IDF cosine graph)
    #[serde(alias = "lex_rank", alias = "lex-rank")]
    LexRank,
    /// TextRank (word-overlap graph)
    #[serde(alias = "text_rank", alias = "text-rank")]
    TextRank,
}

impl Method {
    /// All supported methods
    pub const ALL: [Method; 3] = [Method::Lsa, Method::LexRank, Method::TextRank];

    /// Stable identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Lsa => "lsa",
            Method::LexRank => "lexrank",
            Method::TextRank => "textrank",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Method {
    type Err = SummarizerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "lsa" => Ok(Method::Lsa),
            "lexrank" | "lex_rank" | "lex-rank" => Ok(Method::LexRank),
            "textrank" | "text_rank" | "text-rank" => Ok(Method::TextRank),
            other => Err(SummarizerError::invalid_request(format!(
                "unknown summarization method '{}' (expected lsa, lexrank or textrank)",
                other
            ))),
        }
    }
}

/// Cell weighting for the term-sentence matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingScheme {
    /// Number of occurrences of the term in the sentence
    RawCount,
    /// 1 if the term occurs in the sentence, 0 otherwise
    Binary,
    /// Raw count × log(N / document frequency)
    #[default]
    TfIdf,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for a summarization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code for stopwords and stemming (e.g., "en", "de")
    pub language: String,
    /// Remove stopwords before counting terms
    pub use_stopwords: bool,
    /// Additional stopwords (extend the built-in list)
    pub stopwords: Vec<String>,
    /// Collapse inflected forms onto a common stem
    pub stemming: bool,
    /// Minimum token length in characters
    pub min_token_length: usize,
    /// Term weighting for the term-sentence matrix
    pub weighting: WeightingScheme,
    /// Damping factor for graph ranking (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L1 score delta
    pub convergence_threshold: f64,
    /// Maximum power iterations for graph ranking
    pub max_iterations: usize,
    /// LexRank edges below this cosine similarity are dropped
    pub lex_rank_threshold: f64,
    /// Retained LSA topics (None = requested sentence count)
    pub lsa_topics: Option<usize>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            use_stopwords: true,
            stopwords: Vec::new(),
            stemming: true,
            min_token_length: 1,
            weighting: WeightingScheme::TfIdf,
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 200,
            lex_rank_threshold: 0.1,
            lsa_topics: None,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(SummarizerError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.lex_rank_threshold) {
            return Err(SummarizerError::invalid_config(format!(
                "lex_rank_threshold must be between 0 and 1, got {}",
                self.lex_rank_threshold
            )));
        }

        if self.lsa_topics == Some(0) {
            return Err(SummarizerError::invalid_config("lsa_topics must be > 0"));
        }

        if self.language.trim().is_empty() {
            return Err(SummarizerError::invalid_config("language must not be empty"));
        }

        Ok(())
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: enable or disable stopword removal
    pub fn with_stopwords_enabled(mut self, enabled: bool) -> Self {
        self.use_stopwords = enabled;
        self
    }

    /// Builder method: add custom stopwords
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: enable or disable stemming
    pub fn with_stemming(mut self, stemming: bool) -> Self {
        self.stemming = stemming;
        self
    }

    /// Builder method: set term weighting
    pub fn with_weighting(mut self, weighting: WeightingScheme) -> Self {
        self.weighting = weighting;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set LexRank edge threshold
    pub fn with_lex_rank_threshold(mut self, threshold: f64) -> Self {
        self.lex_rank_threshold = threshold;
        self
    }

    /// Builder method: set the number of LSA topics
    pub fn with_lsa_topics(mut self, topics: usize) -> Self {
        self.lsa_topics = Some(topics);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, terms: &[&str]) -> Sentence {
        let mut s = Sentence::new(terms.join(" "), 0, 0, index);
        s.tokens = terms.iter().map(|t| Token::new(*t, *t, 0, 0)).collect();
        s
    }

    #[test]
    fn test_document_vocabulary_sorted_and_distinct() {
        let doc = Document::new(
            vec![sentence(0, &["cat", "sat"]), sentence(1, &["dog", "cat"])],
            "en",
        );
        assert_eq!(doc.vocabulary(), vec!["cat", "dog", "sat"]);
        assert_eq!(doc.sentence_count(), 2);
    }

    #[test]
    fn test_term_count() {
        let s = sentence(0, &["a", "b", "a"]);
        assert_eq!(s.term_count("a"), 2);
        assert_eq!(s.term_count("z"), 0);
    }

    #[test]
    fn test_display_text_collapses_whitespace() {
        let s = Sentence::new("Machine learning\n    now powers   everything.", 0, 0, 0);
        assert_eq!(s.display_text(), "Machine learning now powers everything.");
    }

    #[test]
    fn test_ranked_indices_tie_break_by_position() {
        let scores = ScoreVector::new(vec![0.2, 0.5, 0.2, 0.5]);
        assert_eq!(scores.ranked_indices(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_ranked_indices_nan_last() {
        let scores = ScoreVector::new(vec![f64::NAN, 0.1, 0.3]);
        assert_eq!(scores.ranked_indices(), vec![2, 1, 0]);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("LSA".parse::<Method>().unwrap(), Method::Lsa);
        assert_eq!("lex-rank".parse::<Method>().unwrap(), Method::LexRank);
        assert_eq!(" TextRank ".parse::<Method>().unwrap(), Method::TextRank);

        let err = "luhn".parse::<Method>().unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_method_serde() {
        let json = serde_json::to_string(&Method::LexRank).unwrap();
        assert_eq!(json, "\"lexrank\"");
        let m: Method = serde_json::from_str("\"text_rank\"").unwrap();
        assert_eq!(m, Method::TextRank);
    }

    #[test]
    fn test_config_validation() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());

        assert!(SummarizerConfig::default()
            .with_damping(1.5)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_lex_rank_threshold(-0.1)
            .validate()
            .is_err());
        assert!(SummarizerConfig::default()
            .with_lsa_topics(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_config_from_json_defaults() {
        let config = SummarizerConfig::from_json(r#"{"stemming": false, "weighting": "binary"}"#)
            .unwrap();
        assert!(!config.stemming);
        assert_eq!(config.weighting, WeightingScheme::Binary);
        assert_eq!(config.max_iterations, 200);
        assert!((config.lex_rank_threshold - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_config_from_json_rejects_invalid() {
        let err = SummarizerConfig::from_json(r#"{"damping": 2.0}"#).unwrap_err();
        assert!(matches!(err, SummarizerError::InvalidConfig { .. }));
    }
}
