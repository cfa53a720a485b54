use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

/// A community event as held on the live path.
///
/// `api_key` is the per-event approval secret; it never reaches public
/// serialization. Anything caller-facing goes through [`PublicEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location_text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub approved: bool,
    pub api_key: Uuid,
}

/// Validated submission payload from which a stored [`Event`] is minted.
///
/// Field-level checks (presence, date parsing, `end_date >= start_date`)
/// happen before a draft is constructed.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location_text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Event {
    /// ## Summary
    /// Mints a fresh, unapproved event with a generated id and api key.
    #[must_use]
    pub fn from_draft(draft: EventDraft) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: draft.title,
            description: draft.description,
            location_text: draft.location_text,
            start_date: draft.start_date,
            end_date: draft.end_date,
            approved: false,
            api_key: Uuid::new_v4(),
        }
    }

    #[must_use]
    pub fn to_public(&self) -> PublicEvent {
        PublicEvent {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            location_text: self.location_text.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            approved: self.approved,
        }
    }
}

/// Caller-facing projection of an [`Event`]: every field except the api key.
/// Dates serialize as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location_text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub approved: bool,
}
