//! Errors raised while writing a starter intake document.

use std::path::PathBuf;
use thiserror::Error;

pub type InitResult<T> = Result<T, InitError>;

#[derive(Debug, Error)]
pub enum InitError {
    /// An intake document is already at the output path and `force` is off.
    #[error("Intake document already exists at {0:?}. Use --force to overwrite.")]
    AlreadyExists(PathBuf),

    /// No embedded template matches the requested format and variant.
    #[error("No intake template named {name}")]
    MissingTemplate { name: String },

    #[error("Failed to create target directory {path:?}: {source}")]
    CreateTargetDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write intake document {path:?}: {source}")]
    WriteIntake {
        path: PathBuf,
        source: std::io::Error,
    },
}
