//! # rapid_summarizer
//!
//! Extractive text summarization: pick the sentences that best represent a
//! document and return them in their original order.
//!
//! Three ranking methods are available:
//!
//! - **LSA**: singular value decomposition of the term-sentence matrix
//! - **LexRank**: PageRank over a thresholded TF-IDF cosine similarity graph
//! - **TextRank**: PageRank over a word-overlap similarity graph
//!
//! ```no_run
//! use rapid_summarizer::{summarize_text, Method};
//!
//! let summary = summarize_text("First sentence. Second one. Third.", Method::LexRank, 2)?;
//! println!("{}", summary.joined());
//! # Ok::<(), rapid_summarizer::SummarizerError>(())
//! ```
//!
//! ## Features
//!
//! - **Unicode-aware**: UAX #29 sentence and word boundaries
//! - **Deterministic**: identical input always yields identical output
//! - **Request-scoped**: no shared mutable state, safe to call concurrently

pub mod errors;
pub mod graph;
pub mod json;
pub mod matrix;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{
    Document, Method, ScoreVector, Sentence, SummarizerConfig, Token, WeightingScheme,
};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use json::summarize_json;
pub use matrix::{svd::Svd, TermSentenceMatrix};
pub use nlp::{stemmer::Stemmer, stopwords::StopwordFilter, tokenizer::Tokenizer, LanguageConfig};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::selector::SentenceSelector;
pub use summarizer::stats::{DocumentStats, SummaryMetrics};
pub use summarizer::{summarize_text, Summarizer, Summary};
pub use variants::{
    lex_rank::LexRankRanker, lsa::LsaRanker, text_rank::TextRankRanker, RankingOutcome,
    RankingStrategy, SentenceRanker,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
