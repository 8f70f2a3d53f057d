//! JSON renderers for `report-config.json` and `config.json`.
//!
//! Both files are pretty-printed with a four-space indent and no trailing
//! newline. Non-ASCII text is written as UTF-8, not escaped.

use rc_protocol::{ConfigJsonDocument, GlobalConfig, OutputKind, ReportSettings};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::{RenderError, RenderResult};

const INDENT: &[u8] = b"    ";

pub fn report_config_json(report: &ReportSettings) -> RenderResult<Vec<u8>> {
    to_indented_json(OutputKind::ReportConfig, report)
}

/// Renders `config.json`, listing the accepted authors instead of keying them by index.
pub fn config_json(config: &GlobalConfig) -> RenderResult<Vec<u8>> {
    to_indented_json(OutputKind::GlobalConfig, &ConfigJsonDocument::from(config))
}

fn to_indented_json<T: Serialize>(kind: OutputKind, value: &T) -> RenderResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(|source| RenderError::Json { kind, source })?;
    Ok(buffer)
}
