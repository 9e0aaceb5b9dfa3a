//! Light suffix stemming
//!
//! Collapses common English inflections ("running", "runs" -> "run") so that
//! they count as one term. Input is expected to be lowercase already.

/// A suffix-stripping English stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stemmer;

impl Stemmer {
    /// Create an English stemmer
    pub fn english() -> Self {
        Self
    }

    /// Stemmer for a language code, if one is available
    pub fn for_language(language: &str) -> Option<Self> {
        match language.to_lowercase().as_str() {
            "en" | "english" => Some(Self),
            _ => None,
        }
    }

    /// Reduce a lowercase word to its stem
    pub fn stem(&self, word: &str) -> String {
        let word = strip_possessive(word);
        if !word.is_ascii() {
            return word.to_string();
        }

        if word.ends_with("ies") && word.len() > 4 {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if word.ends_with("es") && word.len() > 3 {
            let stem = &word[..word.len() - 2];
            if stem.ends_with("ss")
                || stem.ends_with("sh")
                || stem.ends_with("ch")
                || stem.ends_with('x')
                || stem.ends_with('o')
            {
                return stem.to_string();
            }
        }
        if word.ends_with('s') && word.len() > 2 && !word.ends_with("ss") && !word.ends_with("us")
        {
            return word[..word.len() - 1].to_string();
        }
        if word.ends_with("ing") && word.len() > 5 {
            return undouble(&word[..word.len() - 3]).to_string();
        }
        if word.ends_with("ied") && word.len() > 4 {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if word.ends_with("ed") && word.len() > 4 {
            return undouble(&word[..word.len() - 2]).to_string();
        }

        word.to_string()
    }
}

/// Drop a possessive ending ("planet's" -> "planet", "students'" -> "students")
fn strip_possessive(word: &str) -> &str {
    let word = word
        .strip_suffix("'s")
        .or_else(|| word.strip_suffix("\u{2019}s"))
        .filter(|stem| !stem.is_empty())
        .unwrap_or(word);
    word.trim_end_matches(['\'', '\u{2019}'])
}

/// Drop a doubled final consonant ("runn" -> "run", "stopp" -> "stop")
fn undouble(stem: &str) -> &str {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n >= 2
        && bytes[n - 1] == bytes[n - 2]
        && !matches!(bytes[n - 1], b'a' | b'e' | b'i' | b'o' | b'u' | b'l' | b's' | b'z')
    {
        return &stem[..n - 1];
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflections_collapse() {
        let stemmer = Stemmer::english();

        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("runs"), "run");
        assert_eq!(stemmer.stem("run"), "run");
        assert_eq!(stemmer.stem("stopped"), "stop");
        assert_eq!(stemmer.stem("studies"), "study");
        assert_eq!(stemmer.stem("studied"), "study");
        assert_eq!(stemmer.stem("boxes"), "box");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("planet's"), "planet");
        assert_eq!(stemmer.stem("planet\u{2019}s"), "planet");
        assert_eq!(stemmer.stem("students'"), "student");
        assert_eq!(stemmer.stem("orbits"), "orbit");
    }

    #[test]
    fn test_short_and_protected_words_untouched() {
        let stemmer = Stemmer::english();

        assert_eq!(stemmer.stem("is"), "is");
        assert_eq!(stemmer.stem("class"), "class");
        assert_eq!(stemmer.stem("status"), "status");
        assert_eq!(stemmer.stem("sing"), "sing");
        assert_eq!(stemmer.stem("calling"), "call");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        let stemmer = Stemmer::english();
        assert_eq!(stemmer.stem("cafés"), "cafés");
    }

    #[test]
    fn test_for_language() {
        assert!(Stemmer::for_language("en").is_some());
        assert!(Stemmer::for_language("English").is_some());
        assert!(Stemmer::for_language("de").is_none());
    }
}
