//! Intake document loader.
//!
//! An intake document holds every answer given to the wizard in one session.
//! The format is picked from the file extension:
//! - `.toml`
//! - `.yaml` / `.yml`
//! - `.json`

use crate::intake::error::IntakeError;
use crate::intake::error::IntakeResult;
use rc_protocol::intake_models::IntakeDocument;
use std::path::Path;
use tracing::debug;

/// Supported intake document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeFormat {
    Toml,
    Yaml,
    Json,
}

impl IntakeFormat {
    /// Detects the format from the extension of `path`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("toml") => Some(IntakeFormat::Toml),
            Some("yaml") | Some("yml") => Some(IntakeFormat::Yaml),
            Some("json") => Some(IntakeFormat::Json),
            _ => None,
        }
    }
}

/// Loads an intake document from `path`.
///
/// # Errors
///
/// Returns `IntakeError` if:
/// - The extension is not a supported format
/// - The file cannot be read
/// - The file has invalid syntax or wrongly typed fields
///
/// # Example
///
/// ```rust,no_run
/// use rc_core::intake::loader::load_intake;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let doc = load_intake(Path::new("repoconfig.toml")).await?;
/// println!("Document covers {} config files", doc.kinds().len());
/// # Ok(())
/// # }
/// ```
pub async fn load_intake(path: &Path) -> IntakeResult<IntakeDocument> {
    let format = IntakeFormat::from_path(path).ok_or_else(|| IntakeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| IntakeError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;

    let doc = parse_intake(&content, format, path)?;
    debug!(path = %path.display(), kinds = ?doc.kinds(), "Loaded intake document");
    Ok(doc)
}

/// Parses intake document text in the given format.
///
/// `path` is only used to label errors.
pub fn parse_intake(content: &str, format: IntakeFormat, path: &Path) -> IntakeResult<IntakeDocument> {
    match format {
        IntakeFormat::Toml => toml::from_str(content).map_err(|source| IntakeError::TomlParse {
            path: path.to_path_buf(),
            source,
        }),
        IntakeFormat::Yaml => {
            // An empty YAML file is an empty document, not a parse error.
            if content.trim().is_empty() {
                return Ok(IntakeDocument::default());
            }
            serde_yaml::from_str(content).map_err(|source| IntakeError::YamlParse {
                path: path.to_path_buf(),
                source,
            })
        }
        IntakeFormat::Json => serde_json::from_str(content).map_err(|source| IntakeError::JsonParse {
            path: path.to_path_buf(),
            source,
        }),
    }
}
