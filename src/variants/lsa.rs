//! Latent Semantic Analysis ranking
//!
//! Factorizes the term-sentence matrix `A = U Σ Vᵀ` and scores each sentence
//! by the length of its projection onto the retained topics:
//!
//! ```text
//! score(s) = sqrt( Σ_k (σ_k · Vᵀ[k][s])² ),  k < topics
//! ```
//!
//! The topic count is truncated to the numerical rank of the matrix, so a
//! rank-deficient (or all-zero) matrix silently yields fewer topics instead
//! of failing.

use super::{RankingOutcome, SentenceRanker};
use crate::matrix::svd::Svd;
use crate::matrix::TermSentenceMatrix;
use crate::types::{Document, ScoreVector};

/// LSA sentence ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LsaRanker {
    /// Requested number of topics
    pub topics: usize,
}

impl Default for LsaRanker {
    fn default() -> Self {
        Self::new(3)
    }
}

impl LsaRanker {
    /// Create a ranker retaining up to `topics` topics
    pub fn new(topics: usize) -> Self {
        Self { topics }
    }

    /// Rank sentences from the matrix alone
    pub fn rank_matrix(&self, matrix: &TermSentenceMatrix) -> RankingOutcome {
        let svd = Svd::compute(matrix);
        let topics = self.topics.min(svd.rank());

        RankingOutcome {
            scores: score_sentences(&svd, topics),
            iterations: 0,
            delta: 0.0,
            converged: svd.converged,
            topics: Some(topics),
        }
    }
}

impl SentenceRanker for LsaRanker {
    fn rank(&self, _document: &Document, matrix: &TermSentenceMatrix) -> RankingOutcome {
        self.rank_matrix(matrix)
    }
}

/// Singular-value-weighted norm of each sentence over the first `topics`
/// right singular vectors
pub fn score_sentences(svd: &Svd, topics: usize) -> ScoreVector {
    let topics = topics.min(svd.singular_values.len());

    let scores = (0..svd.num_columns())
        .map(|s| {
            (0..topics)
                .map(|k| {
                    let projection = svd.singular_values[k] * svd.right_vectors[(k, s)];
                    projection * projection
                })
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    ScoreVector::new(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{tokenizer::Tokenizer, LanguageConfig};
    use crate::types::WeightingScheme;

    fn matrix(text: &str, scheme: WeightingScheme) -> TermSentenceMatrix {
        let config = LanguageConfig::new("en").without_stopwords().without_stemming();
        let doc = Tokenizer::new(config).tokenize(text).unwrap();
        TermSentenceMatrix::build(&doc, scheme)
    }

    #[test]
    fn test_score_formula_on_diagonal() {
        // A = diag(5, 3): V = I after sorting, scores = singular values
        let svd = Svd::from_rows(&[vec![3.0, 0.0], vec![0.0, 5.0]]);
        let scores = score_sentences(&svd, 2);
        assert!((scores.get(0) - 3.0).abs() < 1e-9);
        assert!((scores.get(1) - 5.0).abs() < 1e-9);

        // One topic keeps only the dominant direction
        let scores = score_sentences(&svd, 1);
        assert!(scores.get(0).abs() < 1e-9);
        assert!((scores.get(1) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_rank_scores_are_column_norms() {
        // With every topic retained, Σ_k (σ_k V[k][s])² = ||A e_s||²
        let m = matrix(
            "Alpha beta. Beta gamma delta. Alpha alpha epsilon.",
            WeightingScheme::RawCount,
        );
        let svd = Svd::compute(&m);
        let scores = score_sentences(&svd, svd.rank());

        for s in 0..m.num_sentences() {
            let norm: f64 = m.column(s).iter().map(|x| x * x).sum::<f64>().sqrt();
            assert!((scores.get(s) - norm).abs() < 1e-9);
        }
    }

    #[test]
    fn test_topics_truncated_to_rank() {
        let m = matrix("Alpha beta. Alpha beta. Alpha beta.", WeightingScheme::RawCount);
        let outcome = LsaRanker::new(3).rank_matrix(&m);

        assert_eq!(outcome.topics, Some(1));
        assert_eq!(outcome.scores.len(), 3);
        assert!((outcome.scores.get(0) - outcome.scores.get(2)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_matrix_scores_zero() {
        // Every term occurs in every sentence: all TF-IDF weights are 0
        let m = matrix("Alpha beta. Beta alpha.", WeightingScheme::TfIdf);
        let outcome = LsaRanker::new(2).rank_matrix(&m);

        assert_eq!(outcome.topics, Some(0));
        assert_eq!(outcome.scores.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn test_deterministic() {
        let m = matrix(
            "Cats chase mice. Dogs chase cats. Mice fear cats and dogs.",
            WeightingScheme::TfIdf,
        );
        let ranker = LsaRanker::new(2);
        assert_eq!(ranker.rank_matrix(&m), ranker.rank_matrix(&m));
    }
}
