//! TextRank for sentences
//!
//! Edge weight = normalized word overlap between two sentences. Every
//! non-zero overlap becomes an edge; there is no threshold.

use super::graph_rank::GraphRanker;
use super::{RankingOutcome, SentenceRanker};
use crate::graph::similarity::WordOverlap;
use crate::matrix::TermSentenceMatrix;
use crate::types::Document;

/// TextRank sentence ranker
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRankRanker {
    graph: GraphRanker,
}

impl TextRankRanker {
    pub fn new(graph: GraphRanker) -> Self {
        Self { graph }
    }
}

impl SentenceRanker for TextRankRanker {
    fn rank(&self, document: &Document, _matrix: &TermSentenceMatrix) -> RankingOutcome {
        let similarity = WordOverlap::new(document);
        self.graph.rank(&similarity, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{tokenizer::Tokenizer, LanguageConfig};
    use crate::types::WeightingScheme;

    fn rank(text: &str) -> RankingOutcome {
        let config = LanguageConfig::new("en").without_stopwords().without_stemming();
        let doc = Tokenizer::new(config).tokenize(text).unwrap();
        let matrix = TermSentenceMatrix::build(&doc, WeightingScheme::TfIdf);
        TextRankRanker::default().rank(&doc, &matrix)
    }

    #[test]
    fn test_central_sentence_wins() {
        // The middle sentence overlaps both neighbours; they share nothing
        let outcome = rank("Red green blue. Green blue yellow purple. Yellow purple orange.");

        assert!(outcome.converged);
        assert_eq!(outcome.scores.ranked_indices()[0], 1);
        assert!((outcome.scores.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_one_word_sentence_is_isolated() {
        let outcome = rank("Hello. Red green blue. Red green yellow.");

        assert_eq!(outcome.scores.ranked_indices()[2], 0);
        assert!((outcome.scores.get(0) - 0.15 / 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_single_sentence() {
        let outcome = rank("Only one sentence here.");
        assert_eq!(outcome.scores.as_slice(), &[1.0]);
    }
}
