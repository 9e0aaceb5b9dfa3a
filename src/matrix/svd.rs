//! Singular value decomposition
//!
//! Thin `A = U Σ Vᵀ` of a dense `m × n` matrix through `nalgebra`. Only `Σ`
//! and `Vᵀ` are kept: sentence scoring never reads `U`.

use super::TermSentenceMatrix;
use nalgebra::{DMatrix, SVD};

/// Iteration cap for the bidiagonal QR solver
const MAX_ITERATIONS: usize = 1000;

/// Result of a singular value decomposition
#[derive(Debug, Clone, PartialEq)]
pub struct Svd {
    /// Singular values, descending (`min(m, n)` of them)
    pub singular_values: Vec<f64>,
    /// `Vᵀ`: row k is the k-th right singular vector, one column per input column
    pub right_vectors: DMatrix<f64>,
    /// Whether the solver finished within its iteration cap
    pub converged: bool,
    /// Row count of the input
    rows: usize,
}

impl Svd {
    /// Decompose a term-sentence matrix (columns = sentences)
    pub fn compute(matrix: &TermSentenceMatrix) -> Self {
        Self::decompose(matrix.to_dense())
    }

    /// Decompose a matrix given as a list of rows
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        Self::decompose(DMatrix::from_fn(m, n, |i, j| {
            rows[i].get(j).copied().unwrap_or(0.0)
        }))
    }

    /// Decompose a dense matrix.
    ///
    /// A matrix without a nonzero cell has no singular values. If the solver
    /// gives up, the result is empty as well and `converged` is false.
    pub fn decompose(matrix: DMatrix<f64>) -> Self {
        let (m, n) = matrix.shape();
        if m == 0 || n == 0 || matrix.iter().all(|&x| x == 0.0) {
            return Self::empty(m, n, true);
        }

        let Some(SVD {
            singular_values,
            v_t: Some(v_t),
            ..
        }) = SVD::try_new(matrix, false, true, f64::EPSILON, MAX_ITERATIONS)
        else {
            return Self::empty(m, n, false);
        };

        let values = singular_values.as_slice();
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));

        let mut right_vectors = DMatrix::from_fn(order.len(), n, |k, j| v_t[(order[k], j)]);

        // Fix the sign so the largest component of each right vector is positive
        for mut row in right_vectors.row_iter_mut() {
            let pivot = row
                .iter()
                .copied()
                .max_by(|a, b| a.abs().total_cmp(&b.abs()))
                .unwrap_or(0.0);
            if pivot < 0.0 {
                row.scale_mut(-1.0);
            }
        }

        Self {
            singular_values: order.iter().map(|&k| values[k]).collect(),
            right_vectors,
            converged: true,
            rows: m,
        }
    }

    fn empty(rows: usize, columns: usize, converged: bool) -> Self {
        Self {
            singular_values: Vec::new(),
            right_vectors: DMatrix::zeros(0, columns),
            converged,
            rows,
        }
    }

    /// Column count of the input
    pub fn num_columns(&self) -> usize {
        self.right_vectors.ncols()
    }

    /// Numerical rank: singular values above `max(m, n) · σ_max · ε`
    pub fn rank(&self) -> usize {
        let sigma_max = self.singular_values.first().copied().unwrap_or(0.0);
        if sigma_max <= 0.0 {
            return 0;
        }
        let dim = self.rows.max(self.num_columns()) as f64;
        let tolerance = dim * sigma_max * f64::EPSILON;
        self.singular_values.iter().filter(|&&s| s > tolerance).count()
    }
}
