//! Core shared types.
//!
//! A [`Sentence`] is a tokenized span of the source text; a
//! [`SentenceScore`] pairs it with the frequency score assigned during
//! summarization. Both are transient per-call values, never persisted.

use serde::{Deserialize, Serialize};

/// A sentence extracted from the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, trimmed of surrounding whitespace.
    pub text: String,
    /// Byte offset of the sentence start in the source text.
    pub start: usize,
    /// Byte offset one past the sentence end in the source text.
    pub end: usize,
    /// Position in document order (0-based).
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// Iterate over the whitespace-separated word tokens of this sentence.
    ///
    /// This is the token stream scoring operates on. Punctuation stays
    /// attached to its word (`"ranked,"` is one token); splitting beyond
    /// whitespace is the sentence tokenizer's concern, not the scorer's.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// A sentence together with its summarization score.
///
/// The score is the sum of document-global frequencies of the sentence's
/// word tokens, counting each occurrence separately. Higher means more
/// representative of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceScore {
    /// The scored sentence.
    pub sentence: Sentence,
    /// Sum of global token frequencies over the sentence's tokens.
    pub score: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_words_split_on_whitespace() {
        let s = Sentence::new("The quick  brown\tfox.", 0, 21, 0);
        let words: Vec<_> = s.words().collect();
        assert_eq!(words, vec!["The", "quick", "brown", "fox."]);
    }

    #[test]
    fn test_sentence_words_empty() {
        let s = Sentence::new("", 0, 0, 0);
        assert_eq!(s.words().count(), 0);
    }
}
