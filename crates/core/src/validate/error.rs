//! Error types for form validation.

use thiserror::Error;

/// Type alias for Result with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a submission is rejected as a whole.
///
/// No file is produced for a rejected submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a single repository with a location was filled in.
    #[error("No repositories configured. Fill in the location of at least one repository.")]
    NoRepositories,

    /// A repository was filled in but none of its branches or groups is complete.
    #[error(
        "Repository {repo:?} has zero valid entries. Fill in all mandatory fields of at least one branch or group."
    )]
    RepositoryWithoutEntries { repo: String },

    /// The report title was left empty.
    #[error("The report title must not be empty.")]
    MissingReportTitle,
}
