//! Sentence ranking algorithms
//!
//! Three interchangeable strategies score every sentence of a document:
//!
//! - **LSA**: singular value decomposition of the term-sentence matrix
//! - **LexRank**: PageRank over a thresholded TF-IDF cosine graph
//! - **TextRank**: PageRank over a word-overlap graph
//!
//! [`RankingStrategy`] selects one by configuration so callers never depend
//! on ranking internals.

pub mod graph_rank;
pub mod lex_rank;
pub mod lsa;
pub mod text_rank;

use crate::matrix::TermSentenceMatrix;
use crate::pagerank::PageRankResult;
use crate::types::{Document, Method, ScoreVector, SummarizerConfig};
use graph_rank::GraphRanker;
use lex_rank::LexRankRanker;
use lsa::LsaRanker;
use text_rank::TextRankRanker;

/// Scores plus diagnostics from one ranking run
#[derive(Debug, Clone, PartialEq)]
pub struct RankingOutcome {
    /// One score per sentence, in document order
    pub scores: ScoreVector,
    /// Power iterations (graph methods), 0 for LSA
    pub iterations: usize,
    /// Final L1 delta of the power iteration (0 for LSA)
    pub delta: f64,
    /// Whether the iterative computation converged
    pub converged: bool,
    /// Topics retained by LSA after rank truncation
    pub topics: Option<usize>,
}

impl From<PageRankResult> for RankingOutcome {
    fn from(result: PageRankResult) -> Self {
        Self {
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
            scores: result.into_score_vector(),
            topics: None,
        }
    }
}

/// A sentence scoring algorithm
pub trait SentenceRanker {
    /// Score every sentence of `document`; `matrix` is the document's
    /// term-sentence matrix under the configured weighting.
    fn rank(&self, document: &Document, matrix: &TermSentenceMatrix) -> RankingOutcome;
}

/// Ranking strategy selected by [`Method`]
#[derive(Debug, Clone, PartialEq)]
pub enum RankingStrategy {
    Lsa(LsaRanker),
    LexRank(LexRankRanker),
    TextRank(TextRankRanker),
}

impl RankingStrategy {
    /// Build the strategy for `method`.
    ///
    /// `sentence_count` is the requested summary length, used as the default
    /// LSA topic count.
    pub fn from_config(method: Method, config: &SummarizerConfig, sentence_count: usize) -> Self {
        let graph = GraphRanker::new(
            config.damping,
            config.convergence_threshold,
            config.max_iterations,
        );

        match method {
            Method::Lsa => RankingStrategy::Lsa(LsaRanker::new(
                config.lsa_topics.unwrap_or(sentence_count).max(1),
            )),
            Method::LexRank => {
                RankingStrategy::LexRank(LexRankRanker::new(graph, config.lex_rank_threshold))
            }
            Method::TextRank => RankingStrategy::TextRank(TextRankRanker::new(graph)),
        }
    }

    /// The method this strategy implements
    pub fn method(&self) -> Method {
        match self {
            RankingStrategy::Lsa(_) => Method::Lsa,
            RankingStrategy::LexRank(_) => Method::LexRank,
            RankingStrategy::TextRank(_) => Method::TextRank,
        }
    }
}

impl SentenceRanker for RankingStrategy {
    fn rank(&self, document: &Document, matrix: &TermSentenceMatrix) -> RankingOutcome {
        match self {
            RankingStrategy::Lsa(ranker) => ranker.rank(document, matrix),
            RankingStrategy::LexRank(ranker) => ranker.rank(document, matrix),
            RankingStrategy::TextRank(ranker) => ranker.rank(document, matrix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_selection() {
        let config = SummarizerConfig::default();
        for method in Method::ALL {
            let strategy = RankingStrategy::from_config(method, &config, 3);
            assert_eq!(strategy.method(), method);
        }
    }

    #[test]
    fn test_lsa_topics_default_to_sentence_count() {
        let config = SummarizerConfig::default();
        let strategy = RankingStrategy::from_config(Method::Lsa, &config, 4);
        assert_eq!(strategy, RankingStrategy::Lsa(LsaRanker::new(4)));

        let config = config.with_lsa_topics(2);
        let strategy = RankingStrategy::from_config(Method::Lsa, &config, 4);
        assert_eq!(strategy, RankingStrategy::Lsa(LsaRanker::new(2)));
    }
}
