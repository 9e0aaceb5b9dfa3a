//! LexRank
//!
//! Edge weight = cosine similarity of TF-IDF sentence vectors; edges below
//! the threshold (default 0.1) are dropped to suppress noise.

use super::graph_rank::GraphRanker;
use super::{RankingOutcome, SentenceRanker};
use crate::graph::similarity::CosineTfIdf;
use crate::matrix::TermSentenceMatrix;
use crate::types::{Document, WeightingScheme};
use std::borrow::Cow;

/// Default minimum cosine similarity for an edge
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// LexRank sentence ranker
#[derive(Debug, Clone, PartialEq)]
pub struct LexRankRanker {
    graph: GraphRanker,
    threshold: f64,
}

impl Default for LexRankRanker {
    fn default() -> Self {
        Self::new(GraphRanker::default(), DEFAULT_THRESHOLD)
    }
}

impl LexRankRanker {
    /// Create a ranker with the given power iteration and edge threshold
    pub fn new(graph: GraphRanker, threshold: f64) -> Self {
        Self { graph, threshold }
    }

    /// Minimum cosine similarity for an edge
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SentenceRanker for LexRankRanker {
    fn rank(&self, document: &Document, matrix: &TermSentenceMatrix) -> RankingOutcome {
        // Cosine is always taken over TF-IDF vectors, whatever the shared
        // matrix was weighted with.
        let tf_idf = if matrix.scheme() == WeightingScheme::TfIdf {
            Cow::Borrowed(matrix)
        } else {
            Cow::Owned(TermSentenceMatrix::build(document, WeightingScheme::TfIdf))
        };

        let similarity = CosineTfIdf::new(&tf_idf);
        self.graph.rank(&similarity, self.threshold)
    }
}
