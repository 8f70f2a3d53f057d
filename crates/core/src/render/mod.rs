//! Rendering accepted records into the exact bytes of each configuration file.
//!
//! Every renderer is a pure function of its record. [`Renderable`] ties each
//! record type to its output kind so callers can produce files generically.

pub mod documents;
pub mod error;
pub mod tables;

use rc_protocol::{
    AuthorEntry, BranchEntry, GlobalConfig, GroupEntry, OutputKind, RepoBatch, ReportSettings,
};
use serde::Serialize;

pub use documents::{config_json, report_config_json};
pub use error::{RenderError, RenderResult};
pub use tables::{author_config_csv, group_config_csv, repo_config_csv};

/// A record that renders into exactly one configuration file.
pub trait Renderable: Serialize {
    const KIND: OutputKind;

    fn render(&self) -> RenderResult<Vec<u8>>;

    /// Fingerprint of the record's content, used to skip re-rendering identical input.
    fn fingerprint(&self) -> RenderResult<String> {
        let canonical = serde_json::to_vec(self).map_err(|source| RenderError::Json {
            kind: Self::KIND,
            source,
        })?;
        Ok(xxh3_hex(&canonical))
    }
}

impl Renderable for RepoBatch<BranchEntry> {
    const KIND: OutputKind = OutputKind::RepoConfig;

    fn render(&self) -> RenderResult<Vec<u8>> {
        repo_config_csv(self)
    }
}

impl Renderable for RepoBatch<AuthorEntry> {
    const KIND: OutputKind = OutputKind::AuthorConfig;

    fn render(&self) -> RenderResult<Vec<u8>> {
        author_config_csv(self)
    }
}

impl Renderable for RepoBatch<GroupEntry> {
    const KIND: OutputKind = OutputKind::GroupConfig;

    fn render(&self) -> RenderResult<Vec<u8>> {
        group_config_csv(self)
    }
}

impl Renderable for ReportSettings {
    const KIND: OutputKind = OutputKind::ReportConfig;

    fn render(&self) -> RenderResult<Vec<u8>> {
        report_config_json(self)
    }
}

impl Renderable for GlobalConfig {
    const KIND: OutputKind = OutputKind::GlobalConfig;

    fn render(&self) -> RenderResult<Vec<u8>> {
        config_json(self)
    }
}

/// xxh3-64 of `data` as 16 lowercase hex digits.
pub fn xxh3_hex(data: &[u8]) -> String {
    use xxhash_rust::xxh3::xxh3_64;
    format!("{:016x}", xxh3_64(data))
}
