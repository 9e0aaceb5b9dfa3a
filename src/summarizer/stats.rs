//! Document statistics and display metrics
//!
//! Word counts are whitespace-separated words of the raw text, not the
//! normalized tokens the rankers see, so stopwords and punctuation-attached
//! words count the same way a reader would count them.

use crate::types::Document;
use serde::{Deserialize, Serialize};

/// Average reading speed used for the read-time estimate
pub const WORDS_PER_MINUTE: f64 = 200.0;

/// Size of the input document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Whitespace-separated words of the raw text
    pub word_count: usize,
    /// Sentences found by the tokenizer
    pub sentence_count: usize,
}

impl DocumentStats {
    pub fn new(raw_text: &str, document: &Document) -> Self {
        Self {
            word_count: count_words(raw_text),
            sentence_count: document.sentence_count(),
        }
    }
}

/// Display arithmetic derived from a document and its summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Words in the original text
    pub word_count: usize,
    /// Words in the joined summary
    pub summary_word_count: usize,
    /// Estimated minutes to read the original, one decimal
    pub reading_time_minutes: f64,
    /// Share of words removed by summarizing, in percent, one decimal
    pub reduction_percent: f64,
}

impl SummaryMetrics {
    /// Compute metrics for a summary of a document with `word_count` words
    pub fn compute(word_count: usize, summary: &str) -> Self {
        let summary_word_count = count_words(summary);
        Self {
            word_count,
            summary_word_count,
            reading_time_minutes: reading_time_minutes(word_count),
            reduction_percent: reduction_percent(word_count, summary_word_count),
        }
    }
}

/// Count whitespace-separated words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes, rounded to one decimal
pub fn reading_time_minutes(word_count: usize) -> f64 {
    round_one_decimal(word_count as f64 / WORDS_PER_MINUTE)
}

/// `(1 - summary / original) × 100`, rounded to one decimal.
///
/// An empty original yields 0.
pub fn reduction_percent(original_words: usize, summary_words: usize) -> f64 {
    if original_words == 0 {
        return 0.0;
    }
    round_one_decimal((1.0 - summary_words as f64 / original_words as f64) * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
