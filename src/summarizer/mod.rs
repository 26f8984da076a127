//! Extractive summarization.
//!
//! Produces a shorter representative text by selecting the sentences whose
//! whitespace tokens carry the highest document-global frequencies. The
//! output keeps selection (rank) order rather than document order; see
//! [`selector`] for the ordering and tie-break rules.

pub mod frequency;
pub mod selector;

pub use frequency::FrequencyTable;

use crate::error::{Error, Result};
use crate::nlp::{SentenceTokenizer, StopwordFilter};
use crate::types::SentenceScore;

/// Enter a tracing span for a summarizer operation (when the `tracing`
/// feature is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_op {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer", op = $name).entered();
    };
}

/// Frequency-scored extractive summarizer.
///
/// Holds the sentence tokenizer and stopword filter as immutable
/// configuration, built once at startup and passed in explicitly — never
/// read from ambient global state. The summarizer itself is stateless
/// across calls; every invocation builds a fresh frequency table.
#[derive(Debug, Clone)]
pub struct Summarizer {
    tokenizer: SentenceTokenizer,
    filter: StopwordFilter,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(StopwordFilter::english())
    }
}

impl Summarizer {
    /// Create a summarizer with the given stopword filter and the default
    /// sentence tokenizer.
    pub fn new(filter: StopwordFilter) -> Self {
        Self {
            tokenizer: SentenceTokenizer::new(),
            filter,
        }
    }

    /// Replace the sentence tokenizer (e.g. to add domain abbreviations).
    pub fn with_tokenizer(mut self, tokenizer: SentenceTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Score every sentence of `text` and return them in rank order.
    ///
    /// This is the ranking that [`summarize`](Self::summarize) truncates;
    /// callers wanting per-sentence diagnostics use it directly.
    pub fn rank(&self, text: &str) -> Vec<SentenceScore> {
        trace_op!("rank");
        let sentences = self.tokenizer.tokenize(text);
        let table = FrequencyTable::build(&sentences, &self.filter);
        selector::rank(sentences, &table)
    }

    /// Summarize `text` down to at most `num_sentences` sentences.
    ///
    /// Sentences are joined with a single space in rank order. When the
    /// text has no more than `num_sentences` sentences, all of them are
    /// returned (still ranked). Empty or whitespace-only input yields an
    /// empty string. A document with no scorable tokens falls back to its
    /// first `num_sentences` sentences, since every score is 0 and ties
    /// keep document order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `num_sentences` is 0.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Result<String> {
        trace_op!("summarize");
        if num_sentences == 0 {
            return Err(Error::invalid_argument("num_sentences must be at least 1"));
        }

        let selected = selector::select_top(self.rank(text), num_sentences);
        let parts: Vec<&str> = selected.iter().map(|s| s.sentence.text.as_str()).collect();
        Ok(parts.join(" "))
    }

    /// Summarize and render each summary sentence as a one-line bullet.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] when `num_points` is 0.
    pub fn bulletize(&self, text: &str, num_points: usize) -> Result<String> {
        trace_op!("bulletize");
        let summary = self.summarize(text, num_points)?;
        let bullets: Vec<String> = self
            .tokenizer
            .tokenize(&summary)
            .into_iter()
            .map(|s| format!("\u{2022} {}", s.text))
            .collect();
        Ok(bullets.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "Birds fly south in winter. Fish swim in rivers. \
                       Rust Rust Rust Rust powers everything here.";

    #[test]
    fn test_summarize_picks_highest_frequency_sentence() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(DOC, 1).unwrap();
        assert_eq!(summary, "Rust Rust Rust Rust powers everything here.");
    }

    #[test]
    fn test_summary_is_in_rank_order_not_document_order() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(DOC, 2).unwrap();
        // The highest-scoring sentence is the last one in the document but
        // leads the summary.
        assert!(summary.starts_with("Rust Rust Rust Rust"));
    }

    #[test]
    fn test_num_sentences_at_least_count_returns_all() {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(DOC, 10).unwrap();
        for part in [
            "Birds fly south in winter.",
            "Fish swim in rivers.",
            "Rust Rust Rust Rust powers everything here.",
        ] {
            assert!(summary.contains(part), "missing {part:?}");
        }
    }

    #[test]
    fn test_empty_input_yields_empty_summary() {
        let summarizer = Summarizer::default();
        assert_eq!(summarizer.summarize("", 3).unwrap(), "");
        assert_eq!(summarizer.summarize("  \n ", 3).unwrap(), "");
    }

    #[test]
    fn test_zero_sentences_is_invalid() {
        let summarizer = Summarizer::default();
        assert!(matches!(
            summarizer.summarize(DOC, 0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            summarizer.bulletize(DOC, 0),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_all_stopword_text_falls_back_to_leading_sentences() {
        let summarizer = Summarizer::default();
        // Only the terminator-carrying tokens ("here.", "there.", "they.")
        // are counted, once each, so every sentence ties and the tie-break
        // keeps document order: the first two sentences win.
        let text = "It is here. He was there. So are they.";
        let summary = summarizer.summarize(text, 2).unwrap();
        assert_eq!(summary, "It is here. He was there.");
    }

    #[test]
    fn test_summarize_is_fixed_point_on_own_output() {
        let summarizer = Summarizer::default();
        let once = summarizer.summarize(DOC, 2).unwrap();
        let twice = summarizer.summarize(&once, 2).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_bulletize_one_bullet_per_sentence() {
        let summarizer = Summarizer::default();
        let bullets = summarizer.bulletize(DOC, 2).unwrap();
        let lines: Vec<&str> = bullets.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with("\u{2022} "));
        }
    }

    #[test]
    fn test_bulletize_empty_input() {
        let summarizer = Summarizer::default();
        assert_eq!(summarizer.bulletize("", 3).unwrap(), "");
    }

    #[test]
    fn test_rank_exposes_scores() {
        let summarizer = Summarizer::default();
        let ranked = summarizer.rank(DOC);
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].score >= ranked[1].score);
        assert!(ranked[1].score >= ranked[2].score);
    }
}
