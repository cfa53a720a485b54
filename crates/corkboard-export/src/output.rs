//! Static JSON artifact writing.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use corkboard_core::month::MonthKey;
use serde::Serialize;

use crate::dataset::{DatasetEvent, DatasetLocation};
use crate::error::{ExportError, ExportResult};

/// Contents of the not-found placeholder artifact.
const NOT_FOUND_BODY: &str = "[]";

/// ## Summary
/// Writes the full artifact set into `out_dir` (created if absent):
/// `locations.json`, one `events-YYYY-MM.json` per bucket, and the fixed
/// `404.html` placeholder. Files are written sequentially; a failure
/// mid-run leaves earlier files in place.
///
/// ## Errors
/// Returns an I/O error for the file that failed, or a JSON error if
/// serialization fails.
#[tracing::instrument(skip(locations, buckets), fields(out_dir = %out_dir.display()))]
pub fn write_artifacts(
    out_dir: &Path,
    locations: &[DatasetLocation],
    buckets: &BTreeMap<MonthKey, Vec<DatasetEvent>>,
) -> ExportResult<()> {
    fs::create_dir_all(out_dir).map_err(|source| ExportError::io(out_dir, source))?;

    write_json(&out_dir.join("locations.json"), &locations)?;

    for (month, events) in buckets {
        write_json(&out_dir.join(format!("events-{month}.json")), events)?;
    }

    let placeholder = out_dir.join("404.html");
    fs::write(&placeholder, NOT_FOUND_BODY)
        .map_err(|source| ExportError::io(placeholder, source))?;

    tracing::info!(
        locations = locations.len(),
        months = buckets.len(),
        "Static artifacts written"
    );
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> ExportResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| ExportError::io(path, source))?;
    tracing::debug!(path = %path.display(), "Wrote artifact");
    Ok(())
}
