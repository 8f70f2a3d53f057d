//! # rc-core
//!
//! Core of repoconfig: turns wizard answers into RepoSense configuration files.
//!
//! This crate provides:
//! - Completeness and batch validation of submitted forms
//! - CSV and JSON rendering of accepted records
//! - Per-session storage of produced files
//! - Zip packaging of produced files
//! - Intake document loading and starter template generation
//!
//! ## Modules
//!
//! - [`validate`]: Draft completeness and batch acceptance
//! - [`render`]: CSV/JSON serializers
//! - [`session`]: Produced-file cache of one user session
//! - [`create`]: The create action of each configuration kind
//! - [`archive`]: Zip packaging
//! - [`sink`]: Scratch persistence of produced files
//! - [`intake`]: Intake document loading
//! - [`init`]: Starter intake document generation

pub mod archive;
pub mod create;
pub mod init;
pub mod intake;
pub mod render;
pub mod session;
pub mod sink;
pub mod validate;
