//! Turning submitted forms into accepted records.
//!
//! Collection keeps only complete drafts. Validation then decides whether the
//! collected batch may be serialized at all; it is all or nothing.

use rc_protocol::{
    Draft, GlobalConfig, GlobalConfigDraft, RepoBatch, RepoForm, ReportDraft, ReportSettings,
};
use tracing::{debug, warn};

use super::error::{ValidationError, ValidationResult};
use super::fields::Completeness;

/// Collects the complete drafts of every repository form into a batch.
///
/// A form without a location is skipped. A repeated location starts over with
/// an empty entry list, and a repeated entry name overwrites the earlier entry;
/// both keep the position of their first occurrence.
pub fn collect_batch<D>(forms: Vec<RepoForm<D>>) -> RepoBatch<D::Entry>
where
    D: Draft + Completeness,
{
    let mut batch = RepoBatch::new();

    for form in forms {
        if form.location.trim().is_empty() {
            debug!("Skipping repository form without a location");
            continue;
        }

        batch.open_repo(form.location.as_str());

        for (index, draft) in form.entries.into_iter().enumerate() {
            if !draft.is_complete() {
                if !draft.is_blank() {
                    debug!(
                        repo = %form.location,
                        index,
                        missing = ?draft.missing_fields(),
                        "Skipping incomplete draft"
                    );
                }
                continue;
            }

            let (name, entry) = draft.into_entry();
            if batch.insert(&form.location, name.as_str(), entry).is_some() {
                debug!(repo = %form.location, name = %name, "Entry overwritten by a later one");
            }
        }
    }

    batch
}

/// Accepts a batch only if it has a repository and every repository has an entry.
pub fn validate_batch<E>(batch: &RepoBatch<E>) -> ValidationResult<()> {
    if batch.is_empty() {
        return Err(ValidationError::NoRepositories);
    }

    if let Some((repo, _)) = batch.repos().find(|(_, entries)| entries.is_empty()) {
        return Err(ValidationError::RepositoryWithoutEntries {
            repo: repo.to_string(),
        });
    }

    Ok(())
}

/// Collects and validates repository forms in one step.
pub fn accept_batch<D>(forms: Vec<RepoForm<D>>) -> ValidationResult<RepoBatch<D::Entry>>
where
    D: Draft + Completeness,
{
    let batch = collect_batch(forms);
    validate_batch(&batch)?;
    Ok(batch)
}

pub fn accept_report(draft: ReportDraft) -> ValidationResult<ReportSettings> {
    if !draft.is_complete() {
        return Err(ValidationError::MissingReportTitle);
    }

    Ok(ReportSettings { title: draft.title })
}

/// Builds the `config.json` record.
///
/// The four global lists are always taken as they are. Author blocks are
/// included only when complete; blank blocks are ignored silently and partial
/// ones are dropped with a warning.
pub fn accept_global_config(draft: GlobalConfigDraft) -> GlobalConfig {
    let mut config = GlobalConfig::from_lists(&draft);

    for (index, author) in draft.authors.into_iter().enumerate() {
        if author.is_complete() {
            config.accept_author(index, author.into_author());
        } else if !author.is_blank() {
            warn!(
                index,
                missing = ?author.missing_fields(),
                "Dropping incomplete author from config.json"
            );
        }
    }

    config
}
