//! Term-sentence matrix construction
//!
//! Rows are the distinct terms of a document (sorted lexicographically so the
//! layout is deterministic), columns are sentences in document order.

pub mod svd;
pub mod unit_vector;

use crate::types::{Document, WeightingScheme};
use nalgebra::DMatrix;
use rustc_hash::FxHashMap;
use unit_vector::UnitVector;

/// Dense term-by-sentence weight matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TermSentenceMatrix {
    /// Row labels
    terms: Vec<String>,
    /// Number of documents (sentences) each term occurs in
    document_frequency: Vec<usize>,
    /// Row-major weights: `weights[row * num_sentences + column]`
    weights: Vec<f64>,
    /// Column count
    num_sentences: usize,
    /// Scheme used to fill the cells
    scheme: WeightingScheme,
}

impl TermSentenceMatrix {
    /// Build the matrix for a document with the given weighting scheme.
    ///
    /// TF-IDF uses `count × ln(N / df)` where N is the sentence count and the
    /// document frequency is floored at 1.
    pub fn build(document: &Document, scheme: WeightingScheme) -> Self {
        let num_sentences = document.sentence_count();
        let terms: Vec<String> = document
            .vocabulary()
            .into_iter()
            .map(str::to_string)
            .collect();

        let row_of: FxHashMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(row, term)| (term.as_str(), row))
            .collect();

        // Raw counts first; document frequency falls out of the same pass.
        let mut counts = vec![0.0; terms.len() * num_sentences];
        let mut document_frequency = vec![0usize; terms.len()];
        for (column, sentence) in document.sentences().iter().enumerate() {
            for term in sentence.terms() {
                if let Some(&row) = row_of.get(term) {
                    let cell = &mut counts[row * num_sentences + column];
                    if *cell == 0.0 {
                        document_frequency[row] += 1;
                    }
                    *cell += 1.0;
                }
            }
        }

        let n = num_sentences as f64;
        let weights = match scheme {
            WeightingScheme::RawCount => counts,
            WeightingScheme::Binary => counts
                .into_iter()
                .map(|c| if c > 0.0 { 1.0 } else { 0.0 })
                .collect(),
            WeightingScheme::TfIdf => counts
                .into_iter()
                .enumerate()
                .map(|(i, c)| {
                    if c == 0.0 {
                        return 0.0;
                    }
                    let df = document_frequency[i / num_sentences].max(1) as f64;
                    c * (n / df).ln()
                })
                .collect(),
        };

        Self {
            terms,
            document_frequency,
            weights,
            num_sentences,
            scheme,
        }
    }

    /// Number of rows (distinct terms)
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of columns (sentences)
    pub fn num_sentences(&self) -> usize {
        self.num_sentences
    }

    /// Weighting scheme used to build the matrix
    pub fn scheme(&self) -> WeightingScheme {
        self.scheme
    }

    /// Row labels in row order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Row index of a term
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.terms.binary_search_by(|t| t.as_str().cmp(term)).ok()
    }

    /// Number of sentences containing the term at `row`
    pub fn document_frequency(&self, row: usize) -> usize {
        self.document_frequency.get(row).copied().unwrap_or(0)
    }

    /// Weight of a term in a sentence
    pub fn get(&self, row: usize, column: usize) -> f64 {
        if row >= self.terms.len() || column >= self.num_sentences {
            return 0.0;
        }
        self.weights[row * self.num_sentences + column]
    }

    /// Dense column of a sentence
    pub fn column(&self, column: usize) -> Vec<f64> {
        (0..self.terms.len()).map(|row| self.get(row, column)).collect()
    }

    /// Dense `num_terms × num_sentences` copy for linear algebra
    pub fn to_dense(&self) -> DMatrix<f64> {
        DMatrix::from_row_slice(self.terms.len(), self.num_sentences, &self.weights)
    }

    /// Check if every cell is zero
    pub fn is_zero(&self) -> bool {
        self.weights.iter().all(|&w| w == 0.0)
    }

    /// L2-normalized sparse vector of a sentence, keyed by term row
    pub fn sentence_vector(&self, column: usize) -> UnitVector {
        let dimensions: FxHashMap<u32, f64> = (0..self.terms.len())
            .filter_map(|row| {
                let w = self.get(row, column);
                (w != 0.0).then_some((row as u32, w))
            })
            .collect();
        UnitVector::from_dimensions(dimensions)
    }
}
