//! Global configuration models for `config.json`.
//!
//! Internally accepted authors are keyed by the index of the form block they
//! were typed into. The file itself always carries them as a list, so the
//! record is converted into a [`ConfigJsonDocument`] before it is written.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::normalize::{lowercased, lowercased_trimmed, trimmed};

/// Raw answers for the `config.json` form.
///
/// # Example
///
/// ```toml
/// [global_config]
/// ignore_glob_list = ["docs/**"]
/// formats = ["java", "md"]
///
/// [[global_config.authors]]
/// git_id = "JohnDoe"
/// emails = ["john@example.com"]
/// display_name = "John"
/// author_names = ["John Doe"]
/// ignore_glob_list = ["test/**"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct GlobalConfigDraft {
    pub ignore_glob_list: Vec<String>,
    pub formats: Vec<String>,
    pub ignore_commit_list: Vec<String>,
    pub ignore_author_list: Vec<String>,
    /// Author blocks in form order; blank or partial blocks are dropped on intake.
    pub authors: Vec<GlobalAuthorDraft>,
}

/// Raw answers for one author block of the `config.json` form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct GlobalAuthorDraft {
    pub git_id: String,
    pub emails: Vec<String>,
    pub display_name: String,
    pub author_names: Vec<String>,
    pub ignore_glob_list: Vec<String>,
}

impl GlobalAuthorDraft {
    pub fn into_author(self) -> GlobalAuthor {
        GlobalAuthor {
            git_id: self.git_id,
            emails: trimmed(&self.emails),
            display_name: self.display_name,
            author_names: trimmed(&self.author_names),
            ignore_glob_list: lowercased(&self.ignore_glob_list),
        }
    }
}

/// One author as it appears in the `authors` list of `config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct GlobalAuthor {
    pub git_id: String,
    pub emails: Vec<String>,
    pub display_name: String,
    pub author_names: Vec<String>,
    pub ignore_glob_list: Vec<String>,
}

/// Accepted `config.json` record.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Trimmed.
    pub ignore_glob_list: Vec<String>,
    /// Lower-cased and trimmed.
    pub formats: Vec<String>,
    pub ignore_commit_list: Vec<String>,
    pub ignore_author_list: Vec<String>,
    /// Accepted authors keyed by their form index.
    pub authors: BTreeMap<usize, GlobalAuthor>,
}

impl GlobalConfig {
    /// Builds the record from the four global lists, normalizing them.
    /// Authors are added separately with [`GlobalConfig::accept_author`].
    pub fn from_lists(draft: &GlobalConfigDraft) -> Self {
        Self {
            ignore_glob_list: trimmed(&draft.ignore_glob_list),
            formats: lowercased_trimmed(&draft.formats),
            ignore_commit_list: trimmed(&draft.ignore_commit_list),
            ignore_author_list: trimmed(&draft.ignore_author_list),
            authors: BTreeMap::new(),
        }
    }

    pub fn accept_author(&mut self, index: usize, author: GlobalAuthor) {
        self.authors.insert(index, author);
    }
}

/// The exact shape written to `config.json`.
///
/// `authors` is absent when no author was accepted, and a list otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
pub struct ConfigJsonDocument {
    pub ignore_glob_list: Vec<String>,
    pub formats: Vec<String>,
    pub ignore_commit_list: Vec<String>,
    pub ignore_author_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<GlobalAuthor>>,
}

impl From<&GlobalConfig> for ConfigJsonDocument {
    fn from(config: &GlobalConfig) -> Self {
        let authors = (!config.authors.is_empty())
            .then(|| config.authors.values().cloned().collect::<Vec<_>>());

        Self {
            ignore_glob_list: config.ignore_glob_list.clone(),
            formats: config.formats.clone(),
            ignore_commit_list: config.ignore_commit_list.clone(),
            ignore_author_list: config.ignore_author_list.clone(),
            authors,
        }
    }
}
