//! The "create configuration" action for each kind.
//!
//! An action validates the submitted forms, renders the accepted records and
//! stores the result in the caller's session. A rejected submission leaves the
//! session untouched.

use rc_protocol::{
    AuthorDraft, BranchDraft, ConfigJsonDocument, Draft, GlobalConfigDraft, GroupDraft,
    IntakeDocument, OutputKind, Production, RepoBatch, RepoForm, ReportDraft,
};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::render::{RenderError, Renderable};
use crate::session::Session;
use crate::sink::ArtifactSink;
use crate::validate::{
    accept_batch, accept_global_config, accept_report, Completeness, ValidationError,
};

/// Result type for create actions.
pub type CreateResult<T> = Result<T, CreateError>;

/// Why a create action produced nothing.
#[derive(Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn create_batch<D>(
    session: &mut Session,
    forms: Vec<RepoForm<D>>,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production>
where
    D: Draft + Completeness,
    RepoBatch<D::Entry>: Renderable,
{
    let batch = accept_batch(forms)?;
    debug!(
        repos = batch.repo_count(),
        entries = batch.entry_count(),
        "Accepted repository forms"
    );
    Ok(session.produce(&batch, sink)?)
}

pub fn create_repo_config(
    session: &mut Session,
    forms: Vec<RepoForm<BranchDraft>>,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production> {
    create_batch(session, forms, sink)
}

pub fn create_author_config(
    session: &mut Session,
    forms: Vec<RepoForm<AuthorDraft>>,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production> {
    create_batch(session, forms, sink)
}

pub fn create_group_config(
    session: &mut Session,
    forms: Vec<RepoForm<GroupDraft>>,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production> {
    create_batch(session, forms, sink)
}

pub fn create_report_config(
    session: &mut Session,
    draft: ReportDraft,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production> {
    let report = accept_report(draft)?;
    Ok(session.produce(&report, sink)?)
}

pub fn create_global_config(
    session: &mut Session,
    draft: GlobalConfigDraft,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Production> {
    let config = accept_global_config(draft);
    Ok(session.produce(&config, sink)?)
}

/// Runs the create action for `kind` using its section of `doc`.
///
/// Returns `Ok(None)` when the document has no section for `kind`.
pub fn create_from_intake(
    session: &mut Session,
    doc: &IntakeDocument,
    kind: OutputKind,
    sink: Option<&dyn ArtifactSink>,
) -> CreateResult<Option<Production>> {
    let production = match kind {
        OutputKind::RepoConfig => doc
            .repo_config
            .clone()
            .map(|forms| create_repo_config(session, forms, sink)),
        OutputKind::AuthorConfig => doc
            .author_config
            .clone()
            .map(|forms| create_author_config(session, forms, sink)),
        OutputKind::GroupConfig => doc
            .group_forms()
            .map(|forms| create_group_config(session, forms, sink)),
        OutputKind::ReportConfig => doc
            .report_config
            .clone()
            .map(|draft| create_report_config(session, draft, sink)),
        OutputKind::GlobalConfig => doc
            .global_config
            .clone()
            .map(|draft| create_global_config(session, draft, sink)),
    };

    production.transpose()
}

/// The records `kind` would be rendered from, as JSON, without producing a file.
///
/// Repository batches appear as `{repo: {name: entry}}`; `config.json`
/// appears in its file shape. Returns `Ok(None)` when `doc` has no section
/// for `kind`.
pub fn preview_from_intake(
    doc: &IntakeDocument,
    kind: OutputKind,
) -> CreateResult<Option<serde_json::Value>> {
    let preview = match kind {
        OutputKind::RepoConfig => doc
            .repo_config
            .clone()
            .map(|forms| to_preview(kind, &accept_batch(forms)?)),
        OutputKind::AuthorConfig => doc
            .author_config
            .clone()
            .map(|forms| to_preview(kind, &accept_batch(forms)?)),
        OutputKind::GroupConfig => doc
            .group_forms()
            .map(|forms| to_preview(kind, &accept_batch(forms)?)),
        OutputKind::ReportConfig => doc
            .report_config
            .clone()
            .map(|draft| to_preview(kind, &accept_report(draft)?)),
        OutputKind::GlobalConfig => doc.global_config.clone().map(|draft| {
            let config = accept_global_config(draft);
            to_preview(kind, &ConfigJsonDocument::from(&config))
        }),
    };

    preview.transpose()
}

fn to_preview<T: Serialize>(kind: OutputKind, record: &T) -> CreateResult<serde_json::Value> {
    serde_json::to_value(record).map_err(|source| RenderError::Json { kind, source }.into())
}
