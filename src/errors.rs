//! Error types for rapid_summarizer
//!
//! A summarization request either completes with a full sentence list or
//! fails with exactly one of these errors. Numerical degeneracy (rank-deficient
//! matrices, graphs without edges, non-convergence) is never an error.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Main error type for rapid_summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizerError {
    /// Input text contains no extractable sentences
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// The request cannot be served (unknown method, impossible sentence count)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizerError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error is an empty input rejection
    pub fn is_empty_input(&self) -> bool {
        matches!(self, Self::EmptyInput { .. })
    }

    /// Check if this error is an invalid request rejection
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizerError::empty_input("no sentences found");
        assert!(err.to_string().contains("Empty input"));
        assert!(err.to_string().contains("no sentences found"));

        let err = SummarizerError::invalid_request("unknown method 'foo'");
        assert!(err.to_string().contains("Invalid request"));
        assert!(err.to_string().contains("foo"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(SummarizerError::empty_input("x").is_empty_input());
        assert!(!SummarizerError::empty_input("x").is_invalid_request());
        assert!(SummarizerError::invalid_request("x").is_invalid_request());
        assert!(!SummarizerError::invalid_config("x").is_empty_input());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummarizerError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, SummarizerError::Serialization { .. }));
    }
}
