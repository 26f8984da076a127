//! Error types for document-assist operations.
//!
//! Every failure is returned to the caller as a typed value; nothing at
//! this layer panics or retries. The GUI/API layer decides how to surface
//! each variant.

use thiserror::Error;

/// Result type alias for docassist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the summarizer or the version store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Operation on a document id that has never been created.
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// `create` on an id that already exists.
    #[error("document already exists: {id}")]
    AlreadyExists { id: String },

    /// Caller supplied an argument outside the operation's domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl Error {
    /// Create a not-found error for a document id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an already-exists error for a document id.
    #[must_use]
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}
