//! Standard PageRank algorithm
//!
//! Implements PageRank with power iteration on the weight-normalized graph:
//!
//! ```text
//! score_i(t+1) = d · Σ_j w(j,i) · score_j(t) / W(j) + (1 − d) / N
//! ```
//!
//! where `W(j)` is the total outgoing weight of `j`. A dangling node (no
//! outgoing weight) spreads its damped mass evenly over the other N − 1
//! nodes, so the scores always sum to 1.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;

/// Standard PageRank implementation
#[derive(Debug, Clone, PartialEq)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 200,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a graph
    ///
    /// Returns the latest scores even if convergence wasn't achieved, with
    /// `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }
        if n == 1 {
            return PageRankResult::new(vec![1.0], 0, 0.0, true);
        }

        // Initialize scores uniformly
        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let dangling_nodes = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let others = (n - 1) as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Dangling mass goes to every node except its source
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / others);
            for &d in &dangling_nodes {
                new_scores[d as usize] -= self.damping * scores[d as usize] / others;
            }

            // Propagate scores through edges
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] +=
                            self.damping * node_score * weight / total_weight;
                    }
                }
            }

            // Calculate convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Scores already sum to ~1; renormalize against rounding drift
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        PageRankResult::new(scores, iterations, delta, delta <= self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn build_triangle_graph() -> CsrGraph {
        let mut builder = GraphBuilder::with_nodes(3);
        builder.set_edge(0, 1, 1.0);
        builder.set_edge(1, 2, 1.0);
        builder.set_edge(2, 0, 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn build_star_graph() -> CsrGraph {
        // Hub connected to 3 spokes
        let mut builder = GraphBuilder::with_nodes(4);
        builder.set_edge(0, 1, 1.0);
        builder.set_edge(0, 2, 1.0);
        builder.set_edge(0, 3, 1.0);
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_triangle_graph_equal_scores() {
        let result = StandardPageRank::new().run(&build_triangle_graph());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_star_graph_hub_highest() {
        let result = StandardPageRank::new().run(&build_star_graph());

        assert!(result.converged);
        let hub_score = result.scores[0];
        for &score in &result.scores[1..] {
            assert!(hub_score > score);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = StandardPageRank::new().run(&build_star_graph());
        assert!((result.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_isolated_node_keeps_only_teleport_mass() {
        // 0 - 2 connected, 1 isolated
        let mut builder = GraphBuilder::with_nodes(3);
        builder.set_edge(0, 2, 0.5);
        let graph = CsrGraph::from_builder(&builder);

        let result = StandardPageRank::new()
            .with_threshold(1e-12)
            .with_max_iterations(1000)
            .run(&graph);

        assert!(result.converged);
        // The isolated node only receives teleport mass: (1 - d) / N
        assert!((result.scores[1] - 0.15 / 3.0).abs() < 1e-9);
        assert!((result.scores[0] - result.scores[2]).abs() < 1e-12);
        assert!((result.total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_dangling_is_uniform() {
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(4));
        let result = StandardPageRank::new().run(&graph);

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_node() {
        let graph = CsrGraph::from_builder(&GraphBuilder::with_nodes(1));
        let result = StandardPageRank::new().run(&graph);
        assert_eq!(result.scores, vec![1.0]);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());
        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(1e-300)
            .run(&build_star_graph());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
        assert!((result.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_damping_factor() {
        let graph = build_star_graph();
        let low = StandardPageRank::new().with_damping(0.5).run(&graph);
        let high = StandardPageRank::new().with_damping(0.95).run(&graph);

        // Higher damping = less teleportation = bigger hub advantage
        let advantage_low = low.scores[0] - low.scores[1];
        let advantage_high = high.scores[0] - high.scores[1];
        assert!(advantage_high > advantage_low);
    }

    #[test]
    fn test_top_n() {
        let result = StandardPageRank::new().run(&build_star_graph());
        let top = result.top_n(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, 0);
        // Spokes tie; lower node ID first
        assert_eq!(top[1].0, 1);
    }
}
