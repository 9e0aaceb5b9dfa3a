//! Sentence similarity graph
//!
//! Similarity functions, a mutable builder and the CSR form consumed by
//! PageRank.

pub mod builder;
pub mod csr;
pub mod similarity;
