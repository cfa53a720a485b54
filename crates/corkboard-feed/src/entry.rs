//! Neutral feed representation.
//!
//! Entries are built once per event here; the Atom and RSS serializers only
//! map these fields into their envelope, never recompute them.

use chrono::NaiveDate;
use corkboard_core::config::FeedConfig;
use corkboard_core::event::PublicEvent;

/// Feed-level metadata, fixed per deployment.
#[derive(Debug, Clone)]
pub struct FeedMeta {
    pub title: String,
    pub description: String,
    /// Public page listing the events; doubles as the feed id and the
    /// alternate link.
    pub page_url: String,
    /// URL this feed itself is served from (the self link).
    pub self_url: String,
    pub logo_url: Option<String>,
    pub language: String,
}

impl FeedMeta {
    #[must_use]
    pub fn from_config(config: &FeedConfig, self_url: impl Into<String>) -> Self {
        Self {
            title: config.title.clone(),
            description: config.description.clone(),
            page_url: config.events_page_url.clone(),
            self_url: self_url.into(),
            logo_url: config.logo_url.clone(),
            language: config.language.clone(),
        }
    }
}

/// One feed entry; `url` serves as both id and link in either envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub url: String,
    pub title: String,
    pub synopsis: String,
}

impl FeedEntry {
    /// ## Summary
    /// Builds the entry for one event: a stable anchor URL on the events page
    /// and a synopsis embedding location and dates verbatim ahead of the
    /// event's own description.
    #[must_use]
    pub fn from_event(event: &PublicEvent, events_page_url: &str) -> Self {
        Self {
            url: format!("{events_page_url}/#event-{}", event.id),
            title: event.title.clone(),
            synopsis: format!(
                "Where? {}.\nWhen? {} - {}.\n\n{}",
                event.location_text, event.start_date, event.end_date, event.description
            ),
        }
    }
}

/// An ordered feed ready for serialization.
#[derive(Debug, Clone)]
pub struct Feed {
    pub meta: FeedMeta,
    /// Build date stamped into the envelope; injected, not read from the
    /// wall clock.
    pub updated: NaiveDate,
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    #[must_use]
    pub fn new(meta: FeedMeta, updated: NaiveDate) -> Self {
        Self {
            meta,
            updated,
            entries: Vec::new(),
        }
    }

    /// ## Summary
    /// Builds a feed whose entries follow the order of `events`.
    #[must_use]
    pub fn from_events(meta: FeedMeta, updated: NaiveDate, events: &[PublicEvent]) -> Self {
        let entries = events
            .iter()
            .map(|event| FeedEntry::from_event(event, &meta.page_url))
            .collect();
        Self {
            meta,
            updated,
            entries,
        }
    }

    pub fn add_entry(&mut self, entry: FeedEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
