//! Hand-authored YAML dataset records and their loaders.
//!
//! Structural problems (missing required key, wrong scalar type, unknown
//! key) surface as YAML errors with file positions; domain rules live in
//! the validator, which names the offending record.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// One event record from `events.yml`. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetEvent {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// One of the allowed kind names; checked by the validator.
    #[serde(rename = "type")]
    pub kind: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// One location record from `locations.yml`; every field is required.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetLocation {
    pub title: String,
    pub description: String,
    pub website: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// ## Summary
/// Loads the events file; an empty document is an empty dataset.
///
/// ## Errors
/// Returns an I/O error when the file cannot be read (a missing file is
/// fatal) or a YAML error when a record does not deserialize.
pub fn load_events(path: &Path) -> ExportResult<Vec<DatasetEvent>> {
    load_records(path)
}

/// ## Summary
/// Loads the locations file; an empty document is an empty dataset.
///
/// ## Errors
/// Same failure modes as [`load_events`].
pub fn load_locations(path: &Path) -> ExportResult<Vec<DatasetLocation>> {
    load_records(path)
}

fn load_records<T: for<'de> Deserialize<'de>>(path: &Path) -> ExportResult<Vec<T>> {
    let raw = fs::read_to_string(path).map_err(|source| ExportError::io(path, source))?;
    if raw.trim().is_empty() {
        tracing::debug!(path = %path.display(), "Dataset file is empty");
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&raw).map_err(|source| ExportError::Yaml {
        path: path.to_owned(),
        source,
    })
}
