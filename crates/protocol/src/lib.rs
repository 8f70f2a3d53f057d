//! # rc-protocol
//!
//! Record model shared by every repoconfig crate.
//!
//! This crate defines the data structures used for:
//! - Raw form answers (drafts) as handed over by a form layer
//! - Accepted, normalized configuration records
//! - The exact shapes of the JSON files written for RepoSense
//! - Produced files held by a session
//!
//! ## Modules
//!
//! - [`repo_models`]: Branch, author and group records for the CSV files
//! - [`config_models`]: Global configuration for `config.json`
//! - [`report_models`]: Report settings for `report-config.json`
//! - [`intake_models`]: A whole session's answers in one document
//! - [`output_models`]: Output kinds, file names and produced files
//! - [`normalize`]: Per-field value normalization
//!
//! ## Design Principles
//!
//! - Minimal dependencies: serde, ts-rs, indexmap and chrono
//! - TypeScript generation: record types derive `TS` so a web form layer can share them
//! - Independent compilation: No dependencies on other repoconfig crates

pub mod config_models;
pub mod intake_models;
pub mod normalize;
pub mod output_models;
pub mod repo_models;
pub mod report_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use intake_models::*;
pub use output_models::*;
pub use repo_models::*;
pub use report_models::*;
