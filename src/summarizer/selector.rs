//! Frequency-ranked sentence selection.
//!
//! Scores every sentence against the document-global [`FrequencyTable`]
//! and keeps the top K. Selection order is rank order: the summary reads
//! highest-scoring sentence first, not document order. Ties are broken by
//! first occurrence in the source text, which also gives the fallback for
//! documents with no scorable tokens — every score is 0, so the first K
//! sentences win in document order.

use super::frequency::FrequencyTable;
use crate::types::{Sentence, SentenceScore};

/// Score all sentences and order them by rank.
///
/// The returned vector is sorted by descending score; equal scores keep
/// their document order (the sort is stable over input already in
/// document order).
pub fn rank(sentences: Vec<Sentence>, table: &FrequencyTable) -> Vec<SentenceScore> {
    let mut scored: Vec<SentenceScore> = sentences
        .into_iter()
        .map(|sentence| {
            let score = table.score(&sentence);
            SentenceScore { sentence, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Keep the `k` best-ranked sentences.
///
/// When `k` is at least the sentence count, everything is kept (still in
/// rank order).
pub fn select_top(mut ranked: Vec<SentenceScore>, k: usize) -> Vec<SentenceScore> {
    ranked.truncate(k);
    ranked
}
