//! Models for produced configuration files.
//!
//! A produced file is the serialized output of one configuration kind,
//! remembered by the session that produced it until the session ends.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Default name of the archive bundling every produced file.
pub const ARCHIVE_FILE_NAME: &str = "configs.zip";

/// The five configuration files understood by RepoSense.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, TS)]
#[serde(rename_all = "kebab-case")]
pub enum OutputKind {
    RepoConfig,
    AuthorConfig,
    GroupConfig,
    ReportConfig,
    GlobalConfig,
}

impl OutputKind {
    /// Every kind, in the order the wizard pages present them.
    pub const ALL: [OutputKind; 5] = [
        OutputKind::RepoConfig,
        OutputKind::AuthorConfig,
        OutputKind::GroupConfig,
        OutputKind::ReportConfig,
        OutputKind::GlobalConfig,
    ];

    /// Fixed file name of this kind, also used as its archive entry name.
    pub fn file_name(self) -> &'static str {
        match self {
            OutputKind::RepoConfig => "repo-config.csv",
            OutputKind::AuthorConfig => "author-config.csv",
            OutputKind::GroupConfig => "group-config.csv",
            OutputKind::ReportConfig => "report-config.json",
            OutputKind::GlobalConfig => "config.json",
        }
    }

    /// Kebab-case name, as used in intake documents and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            OutputKind::RepoConfig => "repo-config",
            OutputKind::AuthorConfig => "author-config",
            OutputKind::GroupConfig => "group-config",
            OutputKind::ReportConfig => "report-config",
            OutputKind::GlobalConfig => "global-config",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }

    pub fn is_csv(self) -> bool {
        matches!(
            self,
            OutputKind::RepoConfig | OutputKind::AuthorConfig | OutputKind::GroupConfig
        )
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Accepts either the slug (`repo-config`) or the file name (`repo-config.csv`).
impl FromStr for OutputKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s || kind.file_name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|kind| kind.slug()).collect();
                format!("unknown configuration kind {s:?}, expected one of: {}", known.join(", "))
            })
    }
}

/// What happened to a session's file when a kind was produced.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Production {
    /// The file did not exist in the session before.
    Created,

    /// The input changed and so did the rendered bytes.
    Replaced,

    /// The input changed but rendered to the same bytes.
    Unchanged,

    /// The input was identical to the last one; nothing was rendered.
    Reused,
}

/// Serialized output of one kind, as held by a session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ProducedFile {
    pub kind: OutputKind,

    /// Exact file contents.
    #[ts(type = "Array<number>")]
    pub bytes: Vec<u8>,

    /// xxh3-64 of `bytes`, as 16 hex digits.
    pub digest: String,

    /// xxh3-64 of the canonical JSON of the record the bytes were rendered from.
    pub input_fingerprint: String,

    #[ts(type = "string")]
    pub produced_at: DateTime<Utc>,
}

impl ProducedFile {
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}
