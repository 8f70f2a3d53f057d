//! Error types for rendering records into file bytes.

use rc_protocol::OutputKind;
use thiserror::Error;

/// Type alias for Result with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors raised by the CSV and JSON encoders.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to encode a CSV record.
    #[error("Failed to write CSV for {kind}: {source}")]
    Csv { kind: OutputKind, source: csv::Error },

    /// Failed to flush the CSV writer into its buffer.
    #[error("Failed to flush CSV for {kind}: {source}")]
    CsvFlush {
        kind: OutputKind,
        source: std::io::Error,
    },

    /// Failed to encode JSON.
    #[error("Failed to write JSON for {kind}: {source}")]
    Json {
        kind: OutputKind,
        source: serde_json::Error,
    },
}
