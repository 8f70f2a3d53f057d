//! Validation of submitted forms.
//!
//! Two layers:
//! - [`fields`]: whether a single draft has all of its mandatory fields
//! - [`batch`]: whether the collected records of a submission may be serialized

pub mod batch;
pub mod error;
pub mod fields;

pub use batch::{
    accept_batch, accept_global_config, accept_report, collect_batch, validate_batch,
};
pub use error::{ValidationError, ValidationResult};
pub use fields::{Completeness, FieldValue, RequiredField};
