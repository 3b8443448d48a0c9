//! Storage Errors
//!
//! Every variant is recovered from silently by the persistence adapter;
//! they exist so internal paths can use `?` and log what went wrong.

use thiserror::Error;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No storage backend could be reached (e.g. localStorage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read slot `{key}`: {reason}")]
    Read { key: String, reason: String },

    /// Quota exceeded, private mode, etc.
    #[error("failed to write slot `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode collection: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode collection: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("duplicate item id {0} in stored collection")]
    DuplicateId(u64),

    #[error("stored item {id} is invalid: {reason}")]
    InvalidItem { id: u64, reason: &'static str },
}
