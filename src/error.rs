//! Error types for storage and persistence.
//!
//! None of these escape the tracker's public operations; the tracker logs
//! them and carries on with its in-memory state.

use thiserror::Error;

/// Failure reported by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem errors from file-backed storage.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend refused or could not serve the request.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure while reading or writing the persistent state blob.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PersistResult<T> = Result<T, PersistError>;
