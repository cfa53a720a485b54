//! Dataset domain rules.
//!
//! The first violation halts the run; successes are only logged. Rules the
//! type system already guarantees (presence, scalar types) are not
//! re-checked here.

use anyhow::Result;

use crate::cli::DatasetArgs;
use crate::dataset::{self, DatasetEvent, DatasetLocation};
use crate::error::{ExportError, ExportResult};

/// Event kinds the dataset accepts.
pub const ALLOWED_EVENT_KINDS: &[&str] = &["Hackathon", "Meetup", "Party", "Other"];

const COORDINATE_BOUND: f64 = 180.0;

/// Runs the `validate` subcommand: load and check both dataset files.
///
/// ## Errors
/// Returns the first load or validation failure.
#[tracing::instrument(skip(args))]
pub fn run(args: &DatasetArgs) -> Result<()> {
    let locations = dataset::load_locations(&args.locations)?;
    validate_locations(&locations)?;
    tracing::info!(count = locations.len(), "Locations validated");

    let events = dataset::load_events(&args.events)?;
    validate_events(&events)?;
    tracing::info!(count = events.len(), "Events validated");

    Ok(())
}

/// ## Summary
/// Checks every event record, stopping at the first failure.
///
/// ## Errors
/// Returns a validation error naming the record title and offending field.
pub fn validate_events(events: &[DatasetEvent]) -> ExportResult<()> {
    for event in events {
        validate_event(event)?;
        tracing::debug!(title = %event.title, "Event record validated");
    }
    Ok(())
}

/// ## Summary
/// Checks every location record, stopping at the first failure.
///
/// ## Errors
/// Returns a validation error naming the record title and offending field.
pub fn validate_locations(locations: &[DatasetLocation]) -> ExportResult<()> {
    for location in locations {
        validate_location(location)?;
        tracing::debug!(title = %location.title, "Location record validated");
    }
    Ok(())
}

fn validate_event(event: &DatasetEvent) -> ExportResult<()> {
    if !ALLOWED_EVENT_KINDS.contains(&event.kind.as_str()) {
        return Err(validation_error(
            "event",
            &event.title,
            "type",
            format!("unknown event type {:?}", event.kind),
        ));
    }

    if event.end_date < event.start_date {
        return Err(validation_error(
            "event",
            &event.title,
            "end_date",
            format!("{} precedes start_date {}", event.end_date, event.start_date),
        ));
    }

    check_optional_coordinate("event", &event.title, "latitude", event.latitude)?;
    check_optional_coordinate("event", &event.title, "longitude", event.longitude)?;

    Ok(())
}

fn validate_location(location: &DatasetLocation) -> ExportResult<()> {
    check_coordinate("location", &location.title, "latitude", location.latitude)?;
    check_coordinate("location", &location.title, "longitude", location.longitude)?;
    Ok(())
}

fn check_optional_coordinate(
    record: &'static str,
    title: &str,
    field: &'static str,
    value: Option<f64>,
) -> ExportResult<()> {
    match value {
        Some(value) => check_coordinate(record, title, field, value),
        None => Ok(()),
    }
}

fn check_coordinate(
    record: &'static str,
    title: &str,
    field: &'static str,
    value: f64,
) -> ExportResult<()> {
    if !(-COORDINATE_BOUND..=COORDINATE_BOUND).contains(&value) {
        return Err(validation_error(
            record,
            title,
            field,
            format!("{value} out of bounds"),
        ));
    }
    Ok(())
}

fn validation_error(
    record: &'static str,
    title: &str,
    field: &'static str,
    problem: String,
) -> ExportError {
    ExportError::Validation {
        record,
        title: title.to_owned(),
        field,
        problem,
    }
}
