//! Starter intake document generation.

use super::error::{InitError, InitResult};
use super::templates::get_template;
use std::path::PathBuf;
use tracing::info;

/// File stem of the generated intake document.
pub const INTAKE_FILE_STEM: &str = "repoconfig";

/// Format of the generated intake document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateFormat {
    #[default]
    Toml,
    Yaml,
}

impl TemplateFormat {
    pub fn extension(self) -> &'static str {
        match self {
            TemplateFormat::Toml => "toml",
            TemplateFormat::Yaml => "yaml",
        }
    }
}

/// Options for generating a starter intake document.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory the intake document is written to.
    pub target_dir: PathBuf,

    /// Overwrite an existing intake document.
    pub force: bool,

    /// Only include the report and repository sections.
    pub minimal: bool,

    pub format: TemplateFormat,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            target_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            force: false,
            minimal: false,
            format: TemplateFormat::default(),
        }
    }
}

impl InitOptions {
    fn template_name(&self) -> String {
        let stem = if self.minimal { "minimal" } else { "intake" };
        format!("{stem}.{}", self.format.extension())
    }

    /// Where the intake document will be written.
    pub fn output_path(&self) -> PathBuf {
        self.target_dir
            .join(format!("{INTAKE_FILE_STEM}.{}", self.format.extension()))
    }
}

/// Writes `repoconfig.toml` (or `.yaml`) into the target directory.
///
/// Returns the path of the written file, or an `InitError` if:
/// - The file already exists (without force flag)
/// - The template cannot be found
/// - File system operations fail
pub async fn generate_intake_template(options: InitOptions) -> InitResult<PathBuf> {
    let path = options.output_path();

    if path.exists() && !options.force {
        return Err(InitError::AlreadyExists(path));
    }

    let template_name = options.template_name();
    let content = get_template(&template_name).ok_or(InitError::MissingTemplate {
        name: template_name,
    })?;

    tokio::fs::create_dir_all(&options.target_dir)
        .await
        .map_err(|source| InitError::CreateTargetDir {
            path: options.target_dir.clone(),
            source,
        })?;

    tokio::fs::write(&path, content)
        .await
        .map_err(|source| InitError::WriteIntake {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), minimal = options.minimal, "Wrote intake document");
    Ok(path)
}
