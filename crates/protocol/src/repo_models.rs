//! Per-repository record models for the three CSV configuration files.
//!
//! Each CSV kind has two shapes:
//! - a *draft*: the raw answers typed into one form block, possibly incomplete
//! - an *entry*: the normalized record that is only built from a complete draft
//!
//! Entries are grouped per repository in a [`RepoBatch`], which keeps the
//! insertion order of both repositories and entries.

use indexmap::map::Entry as MapEntry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::normalize::{lowercased, trimmed};

/// Default file size limit offered by the form, in bytes.
pub const DEFAULT_FILE_SIZE_LIMIT: i64 = 500_000;

/// A draft that can be turned into a keyed entry once it is complete.
///
/// The returned key is the branch or group name the entry is stored under.
pub trait Draft {
    type Entry;

    fn into_entry(self) -> (String, Self::Entry);
}

/// One repository block of a form: its location plus the drafts filled in under it.
///
/// In an intake document the drafts are listed under `branches`; group
/// blocks use [`GroupForm`] instead.
///
/// # Example
///
/// ```yaml
/// location: https://github.com/foo/bar.git
/// branches:
///   - name: master
///     file_formats: [java, py]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, TS)]
pub struct RepoForm<D> {
    /// Remote URL or local path of the repository.
    #[serde(default)]
    pub location: String,

    /// Drafts in the order they were filled in.
    #[serde(default, rename = "branches")]
    pub entries: Vec<D>,
}

impl<D> RepoForm<D> {
    pub fn new(location: impl Into<String>, entries: Vec<D>) -> Self {
        Self {
            location: location.into(),
            entries,
        }
    }
}

/// Raw answers for one branch of `repo-config.csv`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
#[serde(default)]
pub struct BranchDraft {
    /// Branch to analyze, e.g. `master`.
    pub name: String,
    pub file_formats: Vec<String>,
    pub ignore_glob_list: Vec<String>,
    /// Full or partial commit hashes, or `start..end` ranges.
    pub ignore_commit_list: Vec<String>,
    pub ignore_author_list: Vec<String>,
    pub find_previous_authors: bool,
    pub ignore_standalone_config: bool,
    pub shallow_cloning: bool,
    pub ignore_file_size_limit: bool,
    pub skip_ignored_file_analysis: bool,
    /// File size limit in bytes. Stored as entered; clamped when rendered.
    pub file_size_limit: i64,
}

impl Default for BranchDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            file_formats: Vec::new(),
            ignore_glob_list: Vec::new(),
            ignore_commit_list: Vec::new(),
            ignore_author_list: Vec::new(),
            find_previous_authors: false,
            ignore_standalone_config: false,
            shallow_cloning: false,
            ignore_file_size_limit: false,
            skip_ignored_file_analysis: false,
            file_size_limit: DEFAULT_FILE_SIZE_LIMIT,
        }
    }
}

/// A normalized row of `repo-config.csv`, keyed by branch name in its batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct BranchEntry {
    /// Lower-cased file extensions to analyze.
    pub file_formats: Vec<String>,
    /// Trimmed path globs; case is preserved.
    pub ignore_glob_list: Vec<String>,
    pub ignore_commit_list: Vec<String>,
    pub ignore_author_list: Vec<String>,
    pub find_previous_authors: bool,
    pub ignore_standalone_config: bool,
    pub shallow_cloning: bool,
    pub ignore_file_size_limit: bool,
    pub skip_ignored_file_analysis: bool,
    pub file_size_limit: i64,
}

impl BranchEntry {
    /// The file size limit as written to the CSV: never negative.
    pub fn effective_file_size_limit(&self) -> u64 {
        u64::try_from(self.file_size_limit).unwrap_or(0)
    }
}

impl Draft for BranchDraft {
    type Entry = BranchEntry;

    fn into_entry(self) -> (String, BranchEntry) {
        let entry = BranchEntry {
            file_formats: lowercased(&self.file_formats),
            ignore_glob_list: trimmed(&self.ignore_glob_list),
            ignore_commit_list: trimmed(&self.ignore_commit_list),
            ignore_author_list: trimmed(&self.ignore_author_list),
            find_previous_authors: self.find_previous_authors,
            ignore_standalone_config: self.ignore_standalone_config,
            shallow_cloning: self.shallow_cloning,
            ignore_file_size_limit: self.ignore_file_size_limit,
            skip_ignored_file_analysis: self.skip_ignored_file_analysis,
            file_size_limit: self.file_size_limit,
        };
        (self.name, entry)
    }
}

/// Raw answers for one branch of `author-config.csv`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct AuthorDraft {
    pub branch: String,
    /// Username on GitHub, GitLab or Bitbucket.
    pub git_host_id: String,
    pub emails: Vec<String>,
    pub display_name: String,
    pub git_author_names: Vec<String>,
    pub ignore_glob_list: Vec<String>,
}

/// A normalized row of `author-config.csv`, keyed by branch name in its batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct AuthorEntry {
    pub git_host_id: String,
    pub emails: Vec<String>,
    pub display_name: String,
    pub git_author_names: Vec<String>,
    /// Lower-cased path globs.
    pub ignore_glob_list: Vec<String>,
}

impl Draft for AuthorDraft {
    type Entry = AuthorEntry;

    fn into_entry(self) -> (String, AuthorEntry) {
        let entry = AuthorEntry {
            git_host_id: self.git_host_id,
            emails: trimmed(&self.emails),
            display_name: self.display_name,
            git_author_names: trimmed(&self.git_author_names),
            ignore_glob_list: lowercased(&self.ignore_glob_list),
        };
        (self.branch, entry)
    }
}

/// Raw answers for one group of `group-config.csv`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct GroupDraft {
    pub name: String,
    pub globs: Vec<String>,
}

/// One repository block of the group page, listing its drafts under `groups`.
///
/// # Example
///
/// ```yaml
/// location: https://github.com/foo/bar.git
/// groups:
///   - name: code
///     globs: ["src/**"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct GroupForm {
    pub location: String,
    pub groups: Vec<GroupDraft>,
}

impl From<GroupForm> for RepoForm<GroupDraft> {
    fn from(form: GroupForm) -> Self {
        RepoForm::new(form.location, form.groups)
    }
}

/// A normalized row of `group-config.csv`, keyed by group name in its batch.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct GroupEntry {
    /// Trimmed include globs.
    pub globs: Vec<String>,
}

impl Draft for GroupDraft {
    type Entry = GroupEntry;

    fn into_entry(self) -> (String, GroupEntry) {
        let entry = GroupEntry {
            globs: trimmed(&self.globs),
        };
        (self.name, entry)
    }
}

/// Accepted entries grouped by repository, in insertion order.
///
/// Re-inserting an existing key replaces the value but keeps the position of
/// the first insertion, for repositories and entries alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct RepoBatch<E> {
    repos: IndexMap<String, IndexMap<String, E>>,
}

impl<E> Default for RepoBatch<E> {
    fn default() -> Self {
        Self {
            repos: IndexMap::new(),
        }
    }
}

impl<E> RepoBatch<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh, empty entry map for `repo`, discarding any entries it had.
    pub fn open_repo(&mut self, repo: impl Into<String>) {
        self.repos.insert(repo.into(), IndexMap::new());
    }

    /// Stores `entry` under `repo`/`name`. The repository is opened if needed.
    ///
    /// Returns the entry that was overwritten, if any.
    pub fn insert(&mut self, repo: &str, name: impl Into<String>, entry: E) -> Option<E> {
        match self.repos.entry(repo.to_string()) {
            MapEntry::Occupied(mut slot) => slot.get_mut().insert(name.into(), entry),
            MapEntry::Vacant(slot) => {
                slot.insert(IndexMap::new()).insert(name.into(), entry);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Number of repositories.
    pub fn repo_count(&self) -> usize {
        self.repos.len()
    }

    /// Number of (repository, entry) pairs.
    pub fn entry_count(&self) -> usize {
        self.repos.values().map(IndexMap::len).sum()
    }

    pub fn entries_of(&self, repo: &str) -> Option<&IndexMap<String, E>> {
        self.repos.get(repo)
    }

    pub fn repos(&self) -> impl Iterator<Item = (&str, &IndexMap<String, E>)> {
        self.repos.iter().map(|(repo, entries)| (repo.as_str(), entries))
    }

    /// All (repository, name, entry) triples, repositories first, both in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, &str, &E)> {
        self.repos.iter().flat_map(|(repo, entries)| {
            entries
                .iter()
                .map(move |(name, entry)| (repo.as_str(), name.as_str(), entry))
        })
    }
}
