//! Intake document: every answer a user gave the wizard in one session.
//!
//! Each section is optional. A missing section means the corresponding
//! configuration file is not produced; a present but invalid section is an
//! error for that file only.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config_models::GlobalConfigDraft;
use crate::output_models::OutputKind;
use crate::repo_models::{AuthorDraft, BranchDraft, GroupDraft, GroupForm, RepoForm};
use crate::report_models::ReportDraft;

/// Answers for all five configuration pages.
///
/// # Example
///
/// ```yaml
/// report_config:
///   title: Weekly report
/// repo_config:
///   - location: https://github.com/foo/bar.git
///     branches:
///       - name: master
///         file_formats: [java]
///         ignore_glob_list: ["docs/**"]
///         ignore_commit_list: ["abc123"]
///         ignore_author_list: ["bot"]
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, TS)]
#[serde(default)]
pub struct IntakeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_config: Option<Vec<RepoForm<BranchDraft>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_config: Option<Vec<RepoForm<AuthorDraft>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_config: Option<Vec<GroupForm>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_config: Option<ReportDraft>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_config: Option<GlobalConfigDraft>,
}

impl IntakeDocument {
    /// Kinds that have a section in this document, in page order.
    pub fn kinds(&self) -> Vec<OutputKind> {
        OutputKind::ALL
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    /// The group section as generic repository forms.
    pub fn group_forms(&self) -> Option<Vec<RepoForm<GroupDraft>>> {
        self.group_config
            .as_ref()
            .map(|forms| forms.iter().cloned().map(RepoForm::from).collect())
    }

    pub fn has(&self, kind: OutputKind) -> bool {
        match kind {
            OutputKind::RepoConfig => self.repo_config.is_some(),
            OutputKind::AuthorConfig => self.author_config.is_some(),
            OutputKind::GroupConfig => self.group_config.is_some(),
            OutputKind::ReportConfig => self.report_config.is_some(),
            OutputKind::GlobalConfig => self.global_config.is_some(),
        }
    }
}
