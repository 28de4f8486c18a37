//! Error types for the store.

use stash_model::ValidationError;
use stash_predicate::PredicateTypeError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record not found for get/delete by id.
    #[error("record not found: {record_type}/{id}")]
    NotFound { record_type: String, id: String },

    /// Schema or record validation failure. Caller mistake; never retried.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Predicate failed its schema check. Caller mistake; raised before any
    /// record is evaluated.
    #[error(transparent)]
    Predicate(#[from] PredicateTypeError),

    /// A stored row could not be decoded.
    #[error("corrupt row: {0}")]
    Corrupt(String),
}
