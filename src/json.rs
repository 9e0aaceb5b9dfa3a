//! JSON interface
//!
//! One request in, one response out, both as JSON strings. Lets callers in
//! other processes or languages drive the engine without linking against its
//! types.
//!
//! ```json
//! { "text": "...", "method": "lexrank", "sentence_count": 3, "config": { "stemming": false } }
//! ```

use crate::errors::Result;
use crate::summarizer::stats::{DocumentStats, SummaryMetrics};
use crate::summarizer::Summarizer;
use crate::types::{Method, SummarizerConfig};
use serde::{Deserialize, Serialize};

/// Summarization request from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRequest {
    pub text: String,
    /// Method identifier (`lsa`, `lexrank`, `textrank`); defaults to `lsa`
    #[serde(default)]
    pub method: Option<String>,
    /// Sentences to keep; values below 1 select one sentence
    #[serde(default = "default_sentence_count")]
    pub sentence_count: i64,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

fn default_sentence_count() -> i64 {
    3
}

/// Summarization response as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse {
    /// Selected sentences in document order
    pub sentences: Vec<String>,
    /// Selected sentences joined by a space
    pub summary: String,
    pub stats: DocumentStats,
    pub metrics: SummaryMetrics,
    pub method: Method,
}

impl JsonRequest {
    /// Resolve the method identifier
    pub fn method(&self) -> Result<Method> {
        match &self.method {
            Some(name) => name.parse(),
            None => Ok(Method::default()),
        }
    }

    /// Requested sentence count, clamped below at 1
    pub fn sentence_count(&self) -> usize {
        usize::try_from(self.sentence_count.max(1)).unwrap_or(usize::MAX)
    }
}

/// Run a parsed request
pub fn summarize_request(request: &JsonRequest) -> Result<JsonResponse> {
    let method = request.method()?;
    let summarizer = Summarizer::new(request.config.clone().unwrap_or_default())?;
    let summary = summarizer.summarize(&request.text, method, request.sentence_count())?;

    Ok(JsonResponse {
        summary: summary.joined(),
        metrics: summary.metrics(),
        stats: summary.stats,
        method: summary.method,
        sentences: summary.sentences,
    })
}

/// Summarize a JSON request, returning the JSON response
pub fn summarize_json(request: &str) -> Result<String> {
    let request: JsonRequest = serde_json::from_str(request)?;
    let response = summarize_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Cats purr softly. Rockets launch from the coast. Cats purr loudly.";

    fn request(body: serde_json::Value) -> Result<JsonResponse> {
        let raw = summarize_json(&body.to_string())?;
        Ok(serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_defaults() {
        let response = request(serde_json::json!({ "text": TEXT })).unwrap();

        assert_eq!(response.method, Method::Lsa);
        assert_eq!(response.sentences.len(), 3);
        assert_eq!(response.stats.sentence_count, 3);
        assert_eq!(response.summary, TEXT);
    }

    #[test]
    fn test_method_and_count() {
        let response = request(serde_json::json!({
            "text": TEXT,
            "method": "LexRank",
            "sentence_count": 2
        }))
        .unwrap();

        assert_eq!(response.method, Method::LexRank);
        assert_eq!(response.sentences, vec!["Cats purr softly.", "Cats purr loudly."]);
        assert_eq!(response.metrics.summary_word_count, 6);
    }

    #[test]
    fn test_non_positive_count_selects_one() {
        let response = request(serde_json::json!({
            "text": TEXT,
            "method": "textrank",
            "sentence_count": -4
        }))
        .unwrap();
        assert_eq!(response.sentences.len(), 1);
    }

    #[test]
    fn test_config_passthrough() {
        let err = request(serde_json::json!({
            "text": TEXT,
            "config": { "damping": 2.0 }
        }))
        .unwrap_err();
        assert!(matches!(err, crate::SummarizerError::InvalidConfig { .. }));
    }

    #[test]
    fn test_errors() {
        let err = request(serde_json::json!({ "text": TEXT, "method": "bogus" })).unwrap_err();
        assert!(err.is_invalid_request());

        let err = request(serde_json::json!({ "text": "  " })).unwrap_err();
        assert!(err.is_empty_input());

        let err = summarize_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::SummarizerError::Serialization { .. }));
    }
}
