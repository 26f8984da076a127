//! Document-global token frequency table.
//!
//! Built once per summarization call: every whitespace token in the
//! document is lowercased and counted, except tokens the
//! [`StopwordFilter`] excludes. Scoring then sums these counts over a
//! sentence's own tokens.

use rustc_hash::FxHashMap;

use crate::nlp::StopwordFilter;
use crate::types::Sentence;

/// Token → number of occurrences across the whole document.
///
/// Keys are lowercase. Stopwords and single-character punctuation tokens
/// never enter the table, so they contribute nothing to any score.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<String, u64>,
}

impl FrequencyTable {
    /// Count non-stopword tokens across all sentences.
    pub fn build(sentences: &[Sentence], filter: &StopwordFilter) -> Self {
        let mut counts: FxHashMap<String, u64> = FxHashMap::default();
        for sentence in sentences {
            for token in sentence.words() {
                let lowered = token.to_lowercase();
                if !filter.is_stopword(&lowered) {
                    *counts.entry(lowered).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Frequency of a token (case-insensitive); 0 if it was filtered out
    /// or never seen.
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(&token.to_lowercase()).copied().unwrap_or(0)
    }

    /// Score a sentence: the sum of global frequencies over its whitespace
    /// tokens. A token occurring twice in the sentence contributes its
    /// frequency twice.
    pub fn score(&self, sentence: &Sentence) -> u64 {
        sentence.words().map(|token| self.count(token)).sum()
    }

    /// Number of distinct counted tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no token survived filtering (e.g. the document
    /// is all stopwords or all punctuation).
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(parts: &[&str]) -> Vec<Sentence> {
        parts
            .iter()
            .enumerate()
            .map(|(i, text)| Sentence::new(*text, 0, text.len(), i))
            .collect()
    }

    #[test]
    fn test_counts_across_document() {
        let sents = sentences(&["Rust is fast.", "Rust is safe."]);
        let table = FrequencyTable::build(&sents, &StopwordFilter::english());

        assert_eq!(table.count("rust"), 2);
        assert_eq!(table.count("Rust"), 2); // case insensitive
        // "fast." keeps its attached punctuation; "fast" was never a token.
        assert_eq!(table.count("fast."), 1);
        assert_eq!(table.count("fast"), 0);
    }

    #[test]
    fn test_stopwords_never_counted() {
        let sents = sentences(&["The cat is on the mat."]);
        let table = FrequencyTable::build(&sents, &StopwordFilter::english());

        assert_eq!(table.count("the"), 0);
        assert_eq!(table.count("is"), 0);
        assert_eq!(table.count("cat"), 1);
    }

    #[test]
    fn test_score_counts_each_occurrence() {
        let sents = sentences(&["tea tea coffee", "tea milk"]);
        let table = FrequencyTable::build(&sents, &StopwordFilter::english());

        // "tea" has global frequency 3 and appears twice in sentence 0.
        assert_eq!(table.score(&sents[0]), 3 + 3 + 1);
        assert_eq!(table.score(&sents[1]), 3 + 1);
    }

    #[test]
    fn test_all_stopword_document_is_empty() {
        let sents = sentences(&["it is as it was"]);
        let table = FrequencyTable::build(&sents, &StopwordFilter::english());

        assert!(table.is_empty());
        assert_eq!(table.score(&sents[0]), 0);
    }
}
