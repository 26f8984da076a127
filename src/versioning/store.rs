//! In-memory versioned document store.
//!
//! Each document carries its current content, a monotonically increasing
//! version number, and an append-only history of every revision. Updates
//! are serialized per document so version numbers never collide or skip;
//! distinct documents share nothing and proceed independently.
//!
//! Persistence is a collaborator's concern: this store is the logical
//! contract only (create / update / get / history), all in memory.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::diff::{diff_lines, DiffReport};
use crate::error::{Error, Result};

/// Enter a tracing span for a store operation (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_op {
    ($name:expr, $id:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("version_store", op = $name, id = $id).entered();
    };
}

/// One recorded revision of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version number, starting at 1.
    pub version: u32,
    /// Full document content at that version.
    pub content: String,
}

/// A document with its version history.
///
/// Invariant: `history` is append-only, ordered by version, and its last
/// entry always mirrors (`version`, `content`).
#[derive(Debug, Clone)]
struct Document {
    content: String,
    version: u32,
    history: Vec<Snapshot>,
}

impl Document {
    fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            version: 1,
            history: vec![Snapshot {
                version: 1,
                content: content.to_string(),
            }],
        }
    }
}

/// Versioned document store.
///
/// The store is `Send + Sync`: the document index sits behind a read-write
/// lock, and each document behind its own mutex, so concurrent `update`
/// calls on one id run one at a time while other documents stay
/// unblocked.
#[derive(Debug, Default)]
pub struct VersionStore {
    documents: RwLock<FxHashMap<String, Arc<Mutex<Document>>>>,
}

impl VersionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document at version 1.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyExists`] when `id` is already present (duplicate
    /// creation is rejected, never silently overwritten), and
    /// [`Error::InvalidArgument`] for an empty id.
    pub fn create(&self, id: &str, content: &str) -> Result<()> {
        trace_op!("create", id);
        if id.is_empty() {
            return Err(Error::invalid_argument("document id must not be empty"));
        }

        let mut documents = self.documents.write();
        if documents.contains_key(id) {
            return Err(Error::already_exists(id));
        }
        documents.insert(id.to_string(), Arc::new(Mutex::new(Document::new(content))));
        Ok(())
    }

    /// Replace a document's content, recording the new revision.
    ///
    /// The read-modify-write is atomic per document: the version is bumped
    /// by exactly 1 and the snapshot appended under the document's lock.
    /// Returns the line-level diff from the previous content to the new.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` has never been created.
    pub fn update(&self, id: &str, new_content: &str) -> Result<DiffReport> {
        trace_op!("update", id);
        let entry = self.entry(id)?;
        let mut doc = entry.lock();

        let report = diff_lines(&doc.content, new_content);
        doc.version += 1;
        let version = doc.version;
        doc.history.push(Snapshot {
            version,
            content: new_content.to_string(),
        });
        doc.content = new_content.to_string();

        Ok(report)
    }

    /// Current content of a document.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` has never been created.
    pub fn get(&self, id: &str) -> Result<String> {
        Ok(self.entry(id)?.lock().content.clone())
    }

    /// Current version number of a document.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` has never been created.
    pub fn version(&self, id: &str) -> Result<u32> {
        Ok(self.entry(id)?.lock().version)
    }

    /// Full revision history of a document, oldest first.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when `id` has never been created.
    pub fn history(&self, id: &str) -> Result<Vec<Snapshot>> {
        Ok(self.entry(id)?.lock().history.clone())
    }

    /// Diff between two recorded versions of a document.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when the id is unknown or either version was
    /// never recorded.
    pub fn diff_versions(&self, id: &str, from: u32, to: u32) -> Result<DiffReport> {
        let entry = self.entry(id)?;
        let doc = entry.lock();
        let old = Self::content_at(&doc, id, from)?;
        let new = Self::content_at(&doc, id, to)?;
        Ok(diff_lines(old, new))
    }

    /// Whether a document with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.documents.read().contains_key(id)
    }

    /// Number of documents in the store.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    fn content_at<'a>(doc: &'a Document, id: &str, version: u32) -> Result<&'a str> {
        doc.history
            .iter()
            .find(|s| s.version == version)
            .map(|s| s.content.as_str())
            .ok_or_else(|| Error::not_found(format!("{id}@v{version}")))
    }

    /// Fetch a document handle, releasing the index lock before the
    /// caller takes the per-document lock.
    fn entry(&self, id: &str) -> Result<Arc<Mutex<Document>>> {
        self.documents
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id))
    }
}
