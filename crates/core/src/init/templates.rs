//! Embedded starter intake documents.
//!
//! The files of the workspace `templates/` directory are compiled into the
//! binary, so `repoconfig init` works without any files next to it.

use rust_embed::RustEmbed;

/// Embedded template files from the `templates/` directory.
///
/// `CARGO_MANIFEST_DIR` is `crates/core`, so `../../templates` is the
/// workspace root `templates/`. The `debug-embed` feature embeds the files in
/// debug builds too.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../templates"]
pub struct TemplateAssets;

/// Get template file content by path.
///
/// # Example
/// ```
/// use rc_core::init::templates::get_template;
///
/// let intake = get_template("intake.toml").expect("intake.toml should exist");
/// assert!(intake.contains("[report_config]"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// Names of all embedded templates, sorted.
pub fn list_templates() -> Vec<String> {
    let mut names: Vec<String> = TemplateAssets::iter().map(|path| path.to_string()).collect();
    names.sort();
    names
}
