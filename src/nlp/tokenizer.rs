//! Sentence boundary detection.
//!
//! Splits raw text into [`Sentence`]s without resorting to naive
//! split-on-period. A candidate terminator (`.`, `!`, `?`) only ends a
//! sentence when it is not a decimal point, not part of a known
//! abbreviation or single-letter initial, and is followed (after any
//! closing quotes or brackets) by the end of the text or by whitespace and
//! a plausible sentence opener. Blank lines are hard boundaries.
//!
//! Word tokenization is deliberately simple: scoring operates on
//! whitespace-separated tokens, so [`words`] is just `split_whitespace`.

use rustc_hash::FxHashSet;

use crate::types::Sentence;

/// Abbreviations whose trailing period does not end a sentence.
///
/// Stored lowercase without the final period; multi-part forms keep their
/// internal periods (`"e.g"` matches the token `e.g.`).
const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "sr", "jr", "lt", "col", "gen", "capt",
    "sgt", "vs", "etc", "e.g", "i.e", "cf", "al", "ca", "approx", "inc", "ltd", "co", "corp",
    "dept", "univ", "assn", "bros", "fig", "figs", "no", "nos", "vol", "vols", "pp", "ed", "eds",
    "a.m", "p.m", "u.s", "u.k", "u.n", "ph.d", "b.c", "a.d", "jan", "feb", "mar", "apr", "jun",
    "jul", "aug", "sep", "sept", "oct", "nov", "dec", "mon", "tue", "thu", "fri",
];

/// Characters that may trail a terminator and still belong to the sentence.
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201d}' | '\u{2019}' | ')' | ']')
}

/// Characters that can plausibly open the next sentence.
fn is_opener(c: char) -> bool {
    c.is_uppercase()
        || c.is_ascii_digit()
        || matches!(c, '"' | '\'' | '\u{201c}' | '\u{2018}' | '(' | '[')
}

/// Whitespace-separated word tokens of a text, as used for scoring.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Splits text into sentences.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: FxHashSet<String>,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Create a tokenizer with the default abbreviation set.
    pub fn new() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add abbreviations (lowercase, no trailing period) to the default set.
    pub fn with_abbreviations(mut self, extra: &[&str]) -> Self {
        self.abbreviations
            .extend(extra.iter().map(|s| s.to_lowercase()));
        self
    }

    /// Split `text` into sentences with byte spans and document-order
    /// indices. Whitespace-only input yields no sentences.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences: Vec<Sentence> = Vec::new();
        let mut sent_start: Option<usize> = None;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i].1;

            if sent_start.is_none() {
                if !c.is_whitespace() {
                    sent_start = Some(i);
                } else {
                    i += 1;
                }
                continue;
            }

            match c {
                '.' | '!' | '?' => {
                    // Extend over a run of terminators ("?!", "...").
                    let mut j = i;
                    while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '!' | '?') {
                        j += 1;
                    }

                    let lone_period = c == '.' && j == i;
                    let suppressed = lone_period
                        && (self.is_decimal_point(&chars, i)
                            || self.is_abbreviation(text, &chars, sent_start.unwrap_or(0), i));

                    if suppressed {
                        i = j + 1;
                        continue;
                    }

                    // Closing quotes/brackets stay with the sentence.
                    let mut k = j;
                    while k + 1 < chars.len() && is_closer(chars[k + 1].1) {
                        k += 1;
                    }

                    if Self::boundary_confirmed(&chars, k) {
                        if let Some(start) = sent_start.take() {
                            Self::flush(text, &chars, start, k, &mut sentences);
                        }
                        i = k + 1;
                    } else {
                        i = j + 1;
                    }
                }
                '\n' if Self::is_paragraph_break(&chars, i) => {
                    if let Some(start) = sent_start.take() {
                        Self::flush(text, &chars, start, i, &mut sentences);
                    }
                    i += 1;
                }
                _ => i += 1,
            }
        }

        if let Some(start) = sent_start {
            Self::flush(text, &chars, start, chars.len() - 1, &mut sentences);
        }

        sentences
    }

    /// `3.14` — a period flanked by digits never ends a sentence.
    fn is_decimal_point(&self, chars: &[(usize, char)], i: usize) -> bool {
        i > 0
            && chars[i - 1].1.is_ascii_digit()
            && i + 1 < chars.len()
            && chars[i + 1].1.is_ascii_digit()
    }

    /// Check whether the word ending at the period `chars[i]` is a known
    /// abbreviation or a single-letter initial (`J.` in `J. K. Rowling`).
    fn is_abbreviation(
        &self,
        text: &str,
        chars: &[(usize, char)],
        sent_start: usize,
        i: usize,
    ) -> bool {
        let mut w = i;
        while w > sent_start {
            let prev = chars[w - 1].1;
            if prev.is_alphanumeric() || prev == '.' {
                w -= 1;
            } else {
                break;
            }
        }
        if w == i {
            return false;
        }

        let word = &text[chars[w].0..chars[i].0];
        let mut letters = word.chars().filter(|c| c.is_alphabetic());
        if let (Some(first), None) = (letters.next(), letters.next()) {
            if first.is_uppercase() && word.len() == first.len_utf8() {
                return true;
            }
        }
        self.abbreviations.contains(&word.to_lowercase())
    }

    /// A boundary holds when the sentence ends the text, or is followed by
    /// whitespace and a plausible opener for the next sentence.
    fn boundary_confirmed(chars: &[(usize, char)], k: usize) -> bool {
        let Some(&(_, next)) = chars.get(k + 1) else {
            return true;
        };
        if !next.is_whitespace() {
            return false;
        }
        match chars[k + 2..].iter().find(|(_, c)| !c.is_whitespace()) {
            Some(&(_, c)) => is_opener(c),
            None => true,
        }
    }

    /// A newline followed only by spaces/tabs and another newline is a
    /// paragraph break.
    fn is_paragraph_break(chars: &[(usize, char)], i: usize) -> bool {
        chars[i + 1..]
            .iter()
            .take_while(|(_, c)| c.is_whitespace())
            .any(|&(_, c)| c == '\n')
    }

    fn flush(
        text: &str,
        chars: &[(usize, char)],
        start: usize,
        mut end: usize,
        sentences: &mut Vec<Sentence>,
    ) {
        while end > start && chars[end].1.is_whitespace() {
            end -= 1;
        }
        if chars[end].1.is_whitespace() {
            return;
        }
        let byte_start = chars[start].0;
        let byte_end = chars[end].0 + chars[end].1.len_utf8();
        let index = sentences.len();
        sentences.push(Sentence::new(
            &text[byte_start..byte_end],
            byte_start,
            byte_end,
            index,
        ));
    }
}
