//! Readable line-level delta between two document revisions.
//!
//! The comparison recursively anchors on the longest run of identical
//! lines, then renders the unmatched regions as removals and additions.
//! Inside an unmatched region, the most similar old/new line pair (by
//! character-level ratio) is treated as an edit of one line and annotated
//! with a guide line marking the differing character positions:
//!
//! ```text
//!   header
//! - the quick brown fox
//! ?                 ^^^
//! + the quick brown cat
//! ?                 ^^^
//!   footer
//! ```
//!
//! This is a human-readable review delta, not a minimal edit script.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Two lines align as an edit when their character-match ratio reaches
/// this cutoff; below it they are shown as an unrelated remove + add.
const ALIGN_CUTOFF: f64 = 0.75;

// ─── Report types ───────────────────────────────────────────────────────────

/// How a line of the report relates to the two revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Present in both revisions.
    Unchanged,
    /// Present only in the old revision.
    Removed,
    /// Present only in the new revision.
    Added,
    /// Marker line under an aligned edit (`^` changed, `-` deleted,
    /// `+` inserted, at the affected character columns).
    Guide,
}

impl DiffKind {
    /// The two-character prefix used when rendering.
    pub fn prefix(self) -> &'static str {
        match self {
            DiffKind::Unchanged => "  ",
            DiffKind::Removed => "- ",
            DiffKind::Added => "+ ",
            DiffKind::Guide => "? ",
        }
    }
}

/// One annotated line of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffLine {
    fn new(kind: DiffKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.text)
    }
}

/// The full line-level delta between two revisions, in comparison order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub lines: Vec<DiffLine>,
}

impl DiffReport {
    /// Returns `true` if the revisions have identical line content.
    pub fn is_unchanged(&self) -> bool {
        self.lines.iter().all(|l| l.kind == DiffKind::Unchanged)
    }

    /// Lines present only in the new revision.
    pub fn additions(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| l.kind == DiffKind::Added)
            .map(|l| l.text.as_str())
    }

    /// Lines present only in the old revision.
    pub fn removals(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(|l| l.kind == DiffKind::Removed)
            .map(|l| l.text.as_str())
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Compare two texts line by line.
///
/// Lines are split on `\n` (a trailing newline does not produce a phantom
/// empty line; `\r\n` endings are normalized by the split).
pub fn diff_lines(old: &str, new: &str) -> DiffReport {
    let a: Vec<&str> = old.lines().collect();
    let b: Vec<&str> = new.lines().collect();
    let mut lines = Vec::new();
    compare(&a, &b, &mut lines);
    DiffReport { lines }
}

// ─── Line-level comparison ──────────────────────────────────────────────────

fn compare(a: &[&str], b: &[&str], out: &mut Vec<DiffLine>) {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return,
        (true, false) => {
            out.extend(b.iter().map(|l| DiffLine::new(DiffKind::Added, *l)));
            return;
        }
        (false, true) => {
            out.extend(a.iter().map(|l| DiffLine::new(DiffKind::Removed, *l)));
            return;
        }
        (false, false) => {}
    }

    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        aligned_replace(a, b, out);
        return;
    }

    compare(&a[..i], &b[..j], out);
    out.extend(
        a[i..i + size]
            .iter()
            .map(|l| DiffLine::new(DiffKind::Unchanged, *l)),
    );
    compare(&a[i + size..], &b[j + size..], out);
}

/// Render a region with no identical lines: anchor on the most similar
/// old/new pair if one clears the cutoff, otherwise dump removals then
/// additions.
fn aligned_replace(a: &[&str], b: &[&str], out: &mut Vec<DiffLine>) {
    let mut best: Option<(usize, usize, f64)> = None;
    for (i, old_line) in a.iter().enumerate() {
        for (j, new_line) in b.iter().enumerate() {
            let ratio = similarity(old_line, new_line);
            if ratio >= ALIGN_CUTOFF && best.map_or(true, |(_, _, r)| ratio > r) {
                best = Some((i, j, ratio));
            }
        }
    }

    let Some((i, j, _)) = best else {
        out.extend(a.iter().map(|l| DiffLine::new(DiffKind::Removed, *l)));
        out.extend(b.iter().map(|l| DiffLine::new(DiffKind::Added, *l)));
        return;
    };

    compare(&a[..i], &b[..j], out);

    let old_chars: Vec<char> = a[i].chars().collect();
    let new_chars: Vec<char> = b[j].chars().collect();
    let ops = opcodes(&old_chars, &new_chars);

    out.push(DiffLine::new(DiffKind::Removed, a[i]));
    if let Some(tags) = guide_tags(&ops, Side::Old) {
        out.push(DiffLine::new(DiffKind::Guide, tags));
    }
    out.push(DiffLine::new(DiffKind::Added, b[j]));
    if let Some(tags) = guide_tags(&ops, Side::New) {
        out.push(DiffLine::new(DiffKind::Guide, tags));
    }

    compare(&a[i + 1..], &b[j + 1..], out);
}

// ─── Character-level alignment for guide lines ──────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Equal,
    Delete,
    Insert,
    Replace,
}

#[derive(Debug, Clone, Copy)]
struct Opcode {
    op: Op,
    old_len: usize,
    new_len: usize,
}

fn opcodes(a: &[char], b: &[char]) -> Vec<Opcode> {
    let mut ops = Vec::new();
    collect_opcodes(a, b, &mut ops);
    ops
}

fn collect_opcodes(a: &[char], b: &[char], out: &mut Vec<Opcode>) {
    let op = match (a.is_empty(), b.is_empty()) {
        (true, true) => return,
        (true, false) => Some(Op::Insert),
        (false, true) => Some(Op::Delete),
        (false, false) => None,
    };
    if let Some(op) = op {
        out.push(Opcode {
            op,
            old_len: a.len(),
            new_len: b.len(),
        });
        return;
    }

    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        out.push(Opcode {
            op: Op::Replace,
            old_len: a.len(),
            new_len: b.len(),
        });
        return;
    }

    collect_opcodes(&a[..i], &b[..j], out);
    out.push(Opcode {
        op: Op::Equal,
        old_len: size,
        new_len: size,
    });
    collect_opcodes(&a[i + size..], &b[j + size..], out);
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Old,
    New,
}

/// Build the `? ` marker text for one side of an aligned pair, or `None`
/// when there is nothing to mark on that side.
fn guide_tags(ops: &[Opcode], side: Side) -> Option<String> {
    let mut tags = String::new();
    for opcode in ops {
        let (len, mark) = match (side, opcode.op) {
            (Side::Old, Op::Equal) => (opcode.old_len, ' '),
            (Side::Old, Op::Delete) => (opcode.old_len, '-'),
            (Side::Old, Op::Replace) => (opcode.old_len, '^'),
            (Side::Old, Op::Insert) => (0, ' '),
            (Side::New, Op::Equal) => (opcode.new_len, ' '),
            (Side::New, Op::Insert) => (opcode.new_len, '+'),
            (Side::New, Op::Replace) => (opcode.new_len, '^'),
            (Side::New, Op::Delete) => (0, ' '),
        };
        for _ in 0..len {
            tags.push(mark);
        }
    }
    let trimmed = tags.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// ─── Longest-matching-block machinery ───────────────────────────────────────

/// Character-match ratio between two lines: `2 * matches / total length`,
/// where matches is the summed size of the recursive matching blocks.
fn similarity(old_line: &str, new_line: &str) -> f64 {
    let a: Vec<char> = old_line.chars().collect();
    let b: Vec<char> = new_line.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    (2 * match_size(&a, &b)) as f64 / total as f64
}

fn match_size<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let (i, j, size) = longest_match(a, b);
    if size == 0 {
        return 0;
    }
    size + match_size(&a[..i], &b[..j]) + match_size(&a[i + size..], &b[j + size..])
}

/// Find the longest contiguous block `a[i..i+size] == b[j..j+size]`.
///
/// Earliest block wins on ties, so the comparison is deterministic.
fn longest_match<T: Eq + Hash>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    let mut b_positions: FxHashMap<&T, Vec<usize>> = FxHashMap::default();
    for (j, item) in b.iter().enumerate() {
        b_positions.entry(item).or_default().push(j);
    }

    let (mut best_i, mut best_j, mut best_size) = (0, 0, 0);
    // run_lengths[j] = length of the match ending at (i, j).
    let mut run_lengths: FxHashMap<usize, usize> = FxHashMap::default();

    for (i, item) in a.iter().enumerate() {
        let mut next_runs: FxHashMap<usize, usize> = FxHashMap::default();
        if let Some(positions) = b_positions.get(item) {
            for &j in positions {
                let len = if j == 0 {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_runs.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = next_runs;
    }

    (best_i, best_j, best_size)
}
