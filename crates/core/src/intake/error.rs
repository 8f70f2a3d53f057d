//! Error types for intake document loading.
//!
//! This module defines all errors that can occur while reading and parsing
//! an intake document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during intake loading.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Failed to read the intake document from disk.
    #[error("Failed to read intake document at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a TOML intake document.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to parse a YAML intake document.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON intake document.
    #[error("Failed to parse JSON file at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The file extension is not one of `toml`, `yaml`, `yml` or `json`.
    #[error("Unsupported intake document format at {path}: expected .toml, .yaml, .yml or .json")]
    UnsupportedFormat { path: PathBuf },
}

/// Type alias for Result with IntakeError.
pub type IntakeResult<T> = Result<T, IntakeError>;
