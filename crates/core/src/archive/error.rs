//! Error types for archive packaging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for archive operations.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Errors that abort archive creation.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Two entries claim the same name. Output names are fixed per kind, so
    /// this means the caller passed the same file twice.
    #[error("Two archive entries share the name {name:?}")]
    NameCollision { name: String },

    /// The zip encoder rejected an entry or failed to finish.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to write the archive file.
    #[error("Failed to write archive {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
