//! Sparse unit vectors for sentence similarity
//!
//! A sentence column of the term-sentence matrix, keyed by term row and
//! scaled to unit length so cosine similarity reduces to a dot product.

use rustc_hash::FxHashMap;

/// A sparse L2-normalized vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// Non-zero dimensions: term row -> normalized weight
    pub dimensions: FxHashMap<u32, f64>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl UnitVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw weights, normalizing to unit length
    pub fn from_dimensions(mut dimensions: FxHashMap<u32, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity with another vector (0.0 if either is empty)
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        // Iterate the smaller map
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };

        let dot: f64 = small
            .dimensions
            .iter()
            .filter_map(|(key, value)| large.dimensions.get(key).map(|o| value * o))
            .sum();

        // Rounding can push identical vectors marginally past 1
        dot.clamp(0.0, 1.0)
    }

    /// Check if the vector has no non-zero dimensions
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}
