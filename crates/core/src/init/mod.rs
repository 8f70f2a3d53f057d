//! Initialization module for creating a starter intake document.
//!
//! `repoconfig init` writes a commented intake document covering every
//! configuration file (or only the report and repository sections with
//! `--minimal`), ready to be edited and passed to `repoconfig create`.
//!
//! # Example
//!
//! ```no_run
//! use rc_core::init::{generate_intake_template, InitOptions, TemplateFormat};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions {
//!     target_dir: PathBuf::from("."),
//!     force: false,
//!     minimal: false,
//!     format: TemplateFormat::Toml,
//! };
//!
//! let path = generate_intake_template(options).await?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

pub use error::{InitError, InitResult};
pub use generator::{generate_intake_template, InitOptions, TemplateFormat, INTAKE_FILE_STEM};
pub use templates::{get_template, list_templates};
