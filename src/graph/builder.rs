//! Sentence graph builder
//!
//! One node per sentence; undirected weighted edges between sentences whose
//! similarity reaches a threshold. Self-edges are never stored.

use super::similarity::SentenceSimilarity;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A node in the graph builder
#[derive(Debug, Clone, Default)]
pub struct BuilderNode {
    /// Adjacency list: target node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

/// A mutable graph builder for the sentence similarity graph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Node storage, indexed by sentence position
    nodes: Vec<BuilderNode>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with `count` isolated nodes
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: vec![BuilderNode::default(); count],
        }
    }

    /// Build the similarity graph over all sentence pairs.
    ///
    /// Pairs scoring below `min_weight` (or exactly 0) get no edge. When any
    /// weight exceeds 1 all weights are divided by the maximum, which keeps
    /// weights in `[0, 1]` without changing the row-normalized transitions.
    pub fn from_similarity<S: SentenceSimilarity + ?Sized>(
        similarity: &S,
        min_weight: f64,
    ) -> Self {
        let n = similarity.len();

        // Upper triangle, one row per task; rows come back in index order.
        let rows: Vec<Vec<(u32, f64)>> = (0..n)
            .into_par_iter()
            .map(|a| {
                ((a + 1)..n)
                    .filter_map(|b| {
                        let w = similarity.similarity(a, b);
                        (w > 0.0 && w >= min_weight && w.is_finite()).then_some((b as u32, w))
                    })
                    .collect()
            })
            .collect();

        let max_weight = rows
            .iter()
            .flatten()
            .map(|&(_, w)| w)
            .fold(0.0_f64, f64::max);
        let scale = if max_weight > 1.0 { max_weight } else { 1.0 };

        let mut builder = Self::with_nodes(n);
        for (a, row) in rows.into_iter().enumerate() {
            for (b, w) in row {
                builder.set_edge(a as u32, b, w / scale);
            }
        }
        builder
    }

    /// Set the weight of the undirected edge between two nodes
    pub fn set_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return; // No self-loops
        }
        if let Some(node) = self.nodes.get_mut(from as usize) {
            node.edges.insert(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            node.edges.insert(from, weight);
        }
    }

    /// Get the edge weight between two nodes (0.0 when absent)
    pub fn edge_weight(&self, from: u32, to: u32) -> f64 {
        self.nodes
            .get(from as usize)
            .and_then(|n| n.edges.get(&to))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Check if the builder has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over nodes with their IDs
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }
}
