//! docassist — extractive summarization and versioned documents.
//!
//! The core behind a document-assistant frontend. Two independent
//! components, no shared state:
//!
//! - [`Summarizer`] turns raw text into a ranked extractive summary or a
//!   bullet list, scoring sentences by the document-global frequency of
//!   their non-stopword tokens.
//! - [`VersionStore`] keeps documents as content plus an append-only
//!   version history, and reports a readable line-level diff on every
//!   update.
//!
//! Callers supply plain decoded text and consume plain strings and
//! reports back; file formats, persistence backends, and UI concerns all
//! live outside this crate.
//!
//! # Quick start
//!
//! ```
//! use docassist::{Summarizer, VersionStore};
//!
//! let summarizer = Summarizer::default();
//! let summary = summarizer.summarize("Rust is fast. Rust is safe. Pigeons coo.", 2)?;
//! assert!(summary.contains("Rust"));
//!
//! let store = VersionStore::new();
//! store.create("notes", "draft one")?;
//! let diff = store.update("notes", "draft two")?;
//! assert!(!diff.is_unchanged());
//! # Ok::<(), docassist::Error>(())
//! ```

pub mod error;
pub mod nlp;
pub mod summarizer;
pub mod types;
pub mod versioning;

pub use error::{Error, Result};
pub use nlp::{SentenceTokenizer, StopwordFilter};
pub use summarizer::{FrequencyTable, Summarizer};
pub use types::{Sentence, SentenceScore};
pub use versioning::{diff_lines, DiffKind, DiffLine, DiffReport, Snapshot, VersionStore};
