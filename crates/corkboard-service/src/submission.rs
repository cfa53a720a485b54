//! Event submission: field validation, minting, storage.

use chrono::NaiveDate;
use corkboard_core::event::{Event, EventDraft};
use corkboard_store::EventStore;

use crate::error::{ServiceError, ServiceResult};

/// Date format accepted on the submission form; matches the public
/// serialization format.
pub const SUBMISSION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw submission form fields as received on the wire.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location_text: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// ## Summary
/// Validates a raw form into an [`EventDraft`]: every field present and
/// non-blank, dates in `YYYY-MM-DD`, and `end_date` not before `start_date`.
///
/// ## Errors
/// Returns [`ServiceError::ValidationError`] naming the first offending
/// field.
pub fn validate_submission(form: &SubmissionForm) -> ServiceResult<EventDraft> {
    let title = required("title", form.title.as_deref())?;
    let description = required("description", form.description.as_deref())?;
    let location_text = required("location_text", form.location_text.as_deref())?;
    let start_date = parse_date("start_date", required("start_date", form.start_date.as_deref())?)?;
    let end_date = parse_date("end_date", required("end_date", form.end_date.as_deref())?)?;

    if end_date < start_date {
        return Err(ServiceError::ValidationError(format!(
            "end_date {end_date} precedes start_date {start_date}"
        )));
    }

    Ok(EventDraft {
        title: title.to_owned(),
        description: description.to_owned(),
        location_text: location_text.to_owned(),
        start_date,
        end_date,
    })
}

/// ## Summary
/// Validates the form, mints an unapproved event and stores it.
///
/// Returns the stored event so the caller can announce it; the returned
/// value still carries the api key and must not be serialized as-is.
///
/// ## Side Effects
/// Inserts into the event store.
///
/// ## Errors
/// Returns a validation error for a bad form or a store error when the
/// insert fails.
#[tracing::instrument(skip(store, form))]
pub fn submit_event(store: &dyn EventStore, form: &SubmissionForm) -> ServiceResult<Event> {
    let draft = validate_submission(form)?;
    let event = Event::from_draft(draft);
    store.insert(event.clone())?;

    tracing::info!(
        event_id = %event.id,
        title = %event.title,
        start_date = %event.start_date,
        "Event submitted, awaiting approval"
    );
    Ok(event)
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> ServiceResult<&'a str> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ServiceError::ValidationError(format!(
            "missing field: {field}"
        ))),
    }
}

fn parse_date(field: &'static str, raw: &str) -> ServiceResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, SUBMISSION_DATE_FORMAT)
        .map_err(|err| ServiceError::ValidationError(format!("bad {field} {raw:?}: {err}")))
}
