//! Top-N sentence selection
//!
//! Picks the highest-scoring sentences and returns them in document order.
//! Ties are broken by position, lower index first.

use crate::errors::{Result, SummarizerError};
use crate::types::{Document, ScoreVector, Sentence};

/// Selects summary sentences from a scored document
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Select `count` sentences by score.
    ///
    /// `count` is clamped to `[1, sentence_count]`, so asking for more
    /// sentences than exist returns the whole document. Fails with
    /// `InvalidRequest` for an empty document or a score vector of the wrong
    /// length.
    pub fn select<'a>(
        document: &'a Document,
        scores: &ScoreVector,
        count: usize,
    ) -> Result<Vec<&'a Sentence>> {
        if document.is_empty() {
            return Err(SummarizerError::invalid_request(
                "cannot select sentences from an empty document",
            ));
        }
        if scores.len() != document.sentence_count() {
            return Err(SummarizerError::invalid_request(format!(
                "score vector has {} entries for {} sentences",
                scores.len(),
                document.sentence_count()
            )));
        }

        let count = clamp_count(count, document.sentence_count());
        let mut chosen: Vec<usize> = scores.ranked_indices().into_iter().take(count).collect();
        chosen.sort_unstable();

        Ok(chosen
            .into_iter()
            .filter_map(|index| document.sentence(index))
            .collect())
    }
}

/// Clamp a requested sentence count to `[1, available]`
pub fn clamp_count(requested: usize, available: usize) -> usize {
    requested.max(1).min(available)
}
