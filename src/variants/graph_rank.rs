//! Shared skeleton of the graph-based rankers
//!
//! Builds the complete sentence graph from a similarity function, then runs
//! damped power iteration over it. LexRank and TextRank differ only in the
//! similarity function and edge threshold they pass in.

use super::RankingOutcome;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::graph::similarity::SentenceSimilarity;
use crate::pagerank::standard::StandardPageRank;

/// Graph ranking parameters
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphRanker {
    pagerank: StandardPageRank,
}

impl GraphRanker {
    /// Create a ranker with explicit power-iteration parameters
    pub fn new(damping: f64, convergence_threshold: f64, max_iterations: usize) -> Self {
        Self {
            pagerank: StandardPageRank::new()
                .with_damping(damping)
                .with_threshold(convergence_threshold)
                .with_max_iterations(max_iterations),
        }
    }

    /// Power-iteration settings
    pub fn pagerank(&self) -> &StandardPageRank {
        &self.pagerank
    }

    /// Build the similarity graph (edges below `min_weight` dropped)
    pub fn build_graph<S: SentenceSimilarity + ?Sized>(
        &self,
        similarity: &S,
        min_weight: f64,
    ) -> CsrGraph {
        CsrGraph::from_builder(&GraphBuilder::from_similarity(similarity, min_weight))
    }

    /// Score sentences by PageRank over their similarity graph
    pub fn rank<S: SentenceSimilarity + ?Sized>(
        &self,
        similarity: &S,
        min_weight: f64,
    ) -> RankingOutcome {
        let graph = self.build_graph(similarity, min_weight);
        self.pagerank.run(&graph).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<Vec<f64>>);

    impl SentenceSimilarity for Fixed {
        fn len(&self) -> usize {
            self.0.len()
        }
        fn similarity(&self, a: usize, b: usize) -> f64 {
            self.0[a][b]
        }
    }

    #[test]
    fn test_isolated_sentence_ranks_last() {
        // 0 and 2 are similar; 1 shares nothing
        let sim = Fixed(vec![
            vec![1.0, 0.0, 0.6],
            vec![0.0, 1.0, 0.0],
            vec![0.6, 0.0, 1.0],
        ]);
        let outcome = GraphRanker::default().rank(&sim, 0.1);

        assert!(outcome.converged);
        assert_eq!(outcome.scores.ranked_indices(), vec![0, 2, 1]);
        assert!((outcome.scores.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_edges_gives_uniform_scores() {
        let sim = Fixed(vec![vec![0.0; 3]; 3]);
        let outcome = GraphRanker::default().rank(&sim, 0.1);

        for s in outcome.scores.as_slice() {
            assert!((s - 1.0 / 3.0).abs() < 1e-12);
        }
    }
}
