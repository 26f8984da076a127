//! Stopword filtering.
//!
//! Wraps the `stop-words` crate's per-language lists and always unions in
//! the ASCII punctuation characters as single-character tokens, so a
//! whitespace token that is pure punctuation (`"-"`, `";"`) never reaches
//! the frequency table.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// The 32 ASCII punctuation characters, each excluded as a one-character
/// token alongside the language stopword list.
const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A filter deciding which word tokens are excluded from frequency scoring.
///
/// Membership is case-insensitive: tokens are lowercased before lookup,
/// and the filter stores lowercase entries only.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Create a filter from the standard English stopword list plus ASCII
    /// punctuation.
    pub fn english() -> Self {
        Self::for_language("en")
    }

    /// Create a filter for the given language plus ASCII punctuation.
    ///
    /// Accepts short codes or English names (`"en"`, `"german"`, ...).
    /// Unknown languages fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "pl" | "polish" => LANGUAGE::Polish,
            _ => LANGUAGE::English,
        };

        let mut stopwords: FxHashSet<String> =
            get(lang).iter().map(|s| s.to_lowercase()).collect();
        stopwords.extend(ASCII_PUNCTUATION.chars().map(String::from));
        Self { stopwords }
    }

    /// Create a filter from a custom word list plus ASCII punctuation.
    pub fn from_list(words: &[&str]) -> Self {
        let mut stopwords: FxHashSet<String> =
            words.iter().map(|w| w.to_lowercase()).collect();
        stopwords.extend(ASCII_PUNCTUATION.chars().map(String::from));
        Self { stopwords }
    }

    /// Add extra stopwords (e.g. domain boilerplate) to the filter.
    pub fn add(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove words from the filter so they count toward scoring again.
    pub fn remove(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Check whether a token is excluded from scoring.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(&token.to_lowercase())
    }

    /// Number of entries in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Returns `true` if the filter has no entries.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("document"));
        assert!(!filter.is_stopword("summary"));
    }

    #[test]
    fn test_punctuation_is_always_excluded() {
        let filter = StopwordFilter::english();

        for c in ASCII_PUNCTUATION.chars() {
            assert!(filter.is_stopword(&c.to_string()), "{c:?} not excluded");
        }
        // Multi-character punctuation tokens are not single punctuation
        // characters and pass through.
        assert!(!filter.is_stopword("--"));
    }

    #[test]
    fn test_custom_list_keeps_punctuation() {
        let mut filter = StopwordFilter::from_list(&["lorem", "ipsum"]);

        assert!(filter.is_stopword("lorem"));
        assert!(filter.is_stopword(","));
        assert!(!filter.is_stopword("the"));

        filter.add(&["dolor"]);
        assert!(filter.is_stopword("dolor"));

        filter.remove(&["lorem"]);
        assert!(!filter.is_stopword("lorem"));
    }

    #[test]
    fn test_other_language() {
        let filter = StopwordFilter::for_language("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("dokument"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::for_language("tlh");
        assert!(filter.is_stopword("the"));
    }
}
