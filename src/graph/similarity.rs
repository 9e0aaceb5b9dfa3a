//! Sentence similarity functions
//!
//! Edge weights for the sentence graph. Both functions are symmetric and
//! return values in `[0, 1]` after the graph builder's scaling.

use crate::matrix::unit_vector::UnitVector;
use crate::matrix::TermSentenceMatrix;
use crate::types::Document;
use rustc_hash::FxHashSet;

/// Pairwise similarity between the sentences of one document
pub trait SentenceSimilarity: Sync {
    /// Number of sentences the function was built for
    fn len(&self) -> usize;

    /// Similarity of sentences `a` and `b` (never called with `a == b`)
    fn similarity(&self, a: usize, b: usize) -> f64;

    /// Check if there are no sentences
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cosine similarity of TF-IDF sentence vectors (LexRank)
#[derive(Debug, Clone)]
pub struct CosineTfIdf {
    vectors: Vec<UnitVector>,
}

impl CosineTfIdf {
    /// Build from a TF-IDF weighted term-sentence matrix
    pub fn new(matrix: &TermSentenceMatrix) -> Self {
        let vectors = (0..matrix.num_sentences())
            .map(|column| matrix.sentence_vector(column))
            .collect();
        Self { vectors }
    }
}

impl SentenceSimilarity for CosineTfIdf {
    fn len(&self) -> usize {
        self.vectors.len()
    }

    fn similarity(&self, a: usize, b: usize) -> f64 {
        self.vectors[a].cosine_similarity(&self.vectors[b])
    }
}

/// Normalized word overlap (TextRank)
///
/// `|shared words| / (ln |A| + ln |B|)`, where `|A|` counts the tokens of a
/// sentence. Sentences with one token or fewer have similarity 0.
#[derive(Debug, Clone)]
pub struct WordOverlap {
    words: Vec<FxHashSet<String>>,
    lengths: Vec<usize>,
}

impl WordOverlap {
    /// Build from the normalized tokens of a document
    pub fn new(document: &Document) -> Self {
        let words = document
            .sentences()
            .iter()
            .map(|s| s.terms().map(str::to_string).collect())
            .collect();
        let lengths = document.sentences().iter().map(|s| s.token_count()).collect();
        Self { words, lengths }
    }
}

impl SentenceSimilarity for WordOverlap {
    fn len(&self) -> usize {
        self.words.len()
    }

    fn similarity(&self, a: usize, b: usize) -> f64 {
        let (len_a, len_b) = (self.lengths[a], self.lengths[b]);
        if len_a <= 1 || len_b <= 1 {
            return 0.0;
        }

        let (small, large) = if self.words[a].len() <= self.words[b].len() {
            (&self.words[a], &self.words[b])
        } else {
            (&self.words[b], &self.words[a])
        };
        let shared = small.iter().filter(|w| large.contains(*w)).count();
        if shared == 0 {
            return 0.0;
        }

        shared as f64 / ((len_a as f64).ln() + (len_b as f64).ln())
    }
}
