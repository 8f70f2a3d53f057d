//! Shared helpers for the integration tests.
//!
//! - Fixtures: ready-made drafts and forms
//! - Assertions: reading produced CSV, JSON and zip bytes back

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
