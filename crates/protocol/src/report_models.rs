//! Report settings model for `report-config.json`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw answers for the `report-config.json` form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
#[serde(default)]
pub struct ReportDraft {
    /// Title of the generated report and of the deployed dashboard.
    pub title: String,
}

/// Accepted `report-config.json` record; also the exact file shape.
///
/// ```json
/// {
///     "title": "My Team's Report"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ReportSettings {
    pub title: String,
}
