//! Error types for the storage layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Errors raised by the file-system abstraction and the buffered writer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Opening a file failed
    #[error("failed to open '{}': {source}", path.display())]
    Open {
        /// Path that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing, flushing or syncing a file failed
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    /// The path the failing operation targeted.
    pub fn path(&self) -> &PathBuf {
        match self {
            StorageError::Open { path, .. } | StorageError::Write { path, .. } => path,
        }
    }
}
