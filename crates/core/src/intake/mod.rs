//! Intake document loading.
//!
//! This module loads the answers of a wizard session from a TOML, YAML or
//! JSON file so they can be fed into the create actions.

pub mod error;
pub mod loader;

pub use error::{IntakeError, IntakeResult};
pub use loader::{load_intake, parse_intake, IntakeFormat};
