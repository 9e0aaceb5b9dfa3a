//! Unicode-aware sentence and word tokenization
//!
//! Sentence boundaries follow UAX #29, with two corrections applied on top:
//! segments split after a known abbreviation ("Mr.", "Dr.") are rejoined,
//! and hard-wrapped lines (a single newline inside a sentence) are rejoined.
//! Decimal numbers such as "3.14" never produce a boundary under UAX #29.

use super::LanguageConfig;
use crate::errors::{Result, SummarizerError};
use crate::types::{Document, Sentence, Token};
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations whose trailing period does not end a sentence (lowercase,
/// without the final period).
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "rev", "gen", "col", "lt",
    "sgt", "capt", "hon", "fig", "approx", "dept", "est", "e.g", "i.e", "u.s", "u.k", "a.m",
    "p.m",
];

/// Tokenizer producing a [`Document`] from raw text
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: LanguageConfig,
}

impl Tokenizer {
    /// Create a tokenizer with the given language rules
    pub fn new(config: LanguageConfig) -> Self {
        Self { config }
    }

    /// English rules: built-in stopwords and stemming
    pub fn english() -> Self {
        Self::new(LanguageConfig::new("en"))
    }

    /// The language rules in use
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Split text into sentences of normalized tokens.
    ///
    /// Fails with `EmptyInput` when no sentence with alphanumeric content
    /// can be found.
    pub fn tokenize(&self, text: &str) -> Result<Document> {
        let sentences: Vec<Sentence> = self
            .sentence_spans(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let mut sentence = Sentence::new(&text[start..end], start, end, index);
                sentence.tokens = self.tokenize_words(&text[start..end], start);
                sentence
            })
            .collect();

        if sentences.is_empty() {
            return Err(SummarizerError::empty_input(
                "input contains no extractable sentences",
            ));
        }

        Ok(Document::new(sentences, self.config.language.clone()))
    }

    /// Split text into trimmed sentence spans (byte offsets)
    pub fn sentence_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut raw = Vec::new();
        for (idx, segment) in text.split_sentence_bound_indices() {
            let trimmed_start = segment.trim_start();
            if trimmed_start.is_empty() {
                continue;
            }
            let start = idx + (segment.len() - trimmed_start.len());
            let end = idx + segment.trim_end().len();
            raw.push((start, end));
        }

        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(raw.len());
        for span in raw {
            match merged.last_mut() {
                Some(current) if Self::continues(text, *current, span) => current.1 = span.1,
                _ => merged.push(span),
            }
        }

        merged.retain(|&(start, end)| text[start..end].chars().any(char::is_alphanumeric));
        merged
    }

    /// Whether `next` continues the sentence in `current`
    fn continues(text: &str, current: (usize, usize), next: (usize, usize)) -> bool {
        // A blank line is a paragraph break, even after an abbreviation
        let gap = &text[current.1..next.0];
        let line_breaks = gap.matches('\n').count();
        if line_breaks >= 2 {
            return false;
        }

        let content = &text[current.0..current.1];
        if Self::ends_with_abbreviation(content) {
            return true;
        }

        // A single line break without terminal punctuation is a wrapped line
        !Self::ends_with_terminal(content) && line_breaks == 1
    }

    fn ends_with_terminal(content: &str) -> bool {
        let stripped = content.trim_end_matches(|c: char| {
            matches!(c, '"' | '\'' | ')' | ']' | '}' | '»' | '”' | '’')
        });
        stripped
            .chars()
            .last()
            .map(|c| matches!(c, '.' | '!' | '?' | '…' | '。' | '！' | '？'))
            .unwrap_or(false)
    }

    fn ends_with_abbreviation(content: &str) -> bool {
        let Some(last_word) = content.split_whitespace().last() else {
            return false;
        };
        let Some(word) = last_word.strip_suffix('.') else {
            return false;
        };
        let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
        ABBREVIATIONS.contains(&word.to_lowercase().as_str())
    }

    /// Tokenize the words of one sentence; `offset` is the sentence start
    fn tokenize_words(&self, sentence: &str, offset: usize) -> Vec<Token> {
        let mut tokens = Vec::new();

        for (word_start, word) in sentence.unicode_word_indices() {
            // Skip pure punctuation/symbols
            if !word.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            if word.chars().count() < self.config.min_token_length {
                continue;
            }

            let lower = word.to_lowercase();
            if self.config.stopwords.is_stopword(&lower) {
                continue;
            }

            let term = match &self.config.stemmer {
                Some(stemmer) => stemmer.stem(&lower),
                None => lower,
            };

            let start = offset + word_start;
            tokens.push(Token::new(word, term, start, start + word.len()));
        }

        tokens
    }
}
