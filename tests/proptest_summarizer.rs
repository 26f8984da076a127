//! Property-based tests for the summarizer.
//!
//! These tests verify the selection invariants: summaries are built only
//! from input sentences, short texts survive whole, ranking stabilizes,
//! and bullet rendering is line-per-sentence.

use docassist::{SentenceTokenizer, Summarizer};
use proptest::prelude::*;

/// Vocabulary for generated documents. Plain lowercase words, none of
/// them an abbreviation, so sentence boundaries stay unambiguous.
const WORDS: &[&str] = &[
    "document", "editor", "viewer", "summary", "version", "history", "content", "sentence",
    "window", "render", "export", "margin", "layout", "cursor", "buffer", "toolbar",
];

/// Strategy for one sentence: 3-8 vocabulary words, capitalized opener,
/// terminated with a period.
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 3..8).prop_map(|words| {
        let mut text = words.join(" ");
        let first = text.remove(0).to_ascii_uppercase();
        format!("{first}{text}.")
    })
}

/// Strategy for a document of 1-8 sentences.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..8).prop_map(|sentences| sentences.join(" "))
}

fn sentence_texts(text: &str) -> Vec<String> {
    SentenceTokenizer::new()
        .tokenize(text)
        .into_iter()
        .map(|s| s.text)
        .collect()
}

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

proptest! {
    /// Property: when the budget covers every sentence, nothing is lost.
    #[test]
    fn generous_budget_keeps_all_sentences(doc in document()) {
        let summarizer = Summarizer::default();
        let input_sentences = sentence_texts(&doc);

        let summary = summarizer.summarize(&doc, input_sentences.len()).unwrap();
        let summary_sentences = sentence_texts(&summary);

        prop_assert_eq!(sorted(summary_sentences), sorted(input_sentences));
    }

    /// Property: a summary only ever contains input sentences.
    #[test]
    fn summary_is_a_subset_of_input_sentences(doc in document(), n in 1usize..5) {
        let summarizer = Summarizer::default();
        let mut available = sentence_texts(&doc);

        for sentence in sentence_texts(&summarizer.summarize(&doc, n).unwrap()) {
            let position = available.iter().position(|s| *s == sentence);
            prop_assert!(position.is_some(), "fabricated sentence: {sentence:?}");
            available.remove(position.unwrap());
        }
    }

    /// Property: the summary never exceeds the requested sentence count.
    #[test]
    fn summary_respects_the_budget(doc in document(), n in 1usize..5) {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(&doc, n).unwrap();
        prop_assert!(sentence_texts(&summary).len() <= n);
    }

    /// Property: re-summarizing keeps the sentence set, and the ranking
    /// stabilizes — from the second application onward the output is an
    /// exact fixed point.
    #[test]
    fn ranking_stabilizes_on_resummarization(doc in document(), n in 1usize..5) {
        let summarizer = Summarizer::default();
        let first = summarizer.summarize(&doc, n).unwrap();
        let second = summarizer.summarize(&first, n).unwrap();
        let third = summarizer.summarize(&second, n).unwrap();

        prop_assert_eq!(sorted(sentence_texts(&first)), sorted(sentence_texts(&second)));
        prop_assert_eq!(second, third);
    }

    /// Property: one bullet line per summary sentence, each marked.
    #[test]
    fn bulletize_renders_one_line_per_sentence(doc in document(), n in 1usize..5) {
        let summarizer = Summarizer::default();
        let summary = summarizer.summarize(&doc, n).unwrap();
        let bullets = summarizer.bulletize(&doc, n).unwrap();

        let lines: Vec<&str> = bullets.lines().collect();
        prop_assert_eq!(lines.len(), sentence_texts(&summary).len());
        for line in lines {
            prop_assert!(line.starts_with("\u{2022} "), "line missing bullet prefix: {:?}", line);
        }
    }

    /// Property: arbitrary text never makes summarization fail — at worst
    /// the summary is empty.
    #[test]
    fn arbitrary_text_never_errors(text in ".{0,200}", n in 1usize..5) {
        let summarizer = Summarizer::default();
        prop_assert!(summarizer.summarize(&text, n).is_ok());
        prop_assert!(summarizer.bulletize(&text, n).is_ok());
    }
}
