//! In-memory [`EventStore`] implementation.

use std::sync::RwLock;

use corkboard_core::event::Event;
use corkboard_core::window::DateWindow;
use uuid::Uuid;

use crate::{EventStore, StoreError, StoreResult};

/// Events held in submission order behind an `RwLock`.
///
/// The vector order is what makes the selection tie-break stable: a stable
/// sort by start date leaves equal-dated events exactly as submitted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    events: RwLock<Vec<Event>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store, keeping the given order as submission order.
    #[must_use]
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }
}

impl EventStore for MemoryStore {
    #[tracing::instrument(skip(self, event), fields(event_id = %event.id))]
    fn insert(&self, event: Event) -> StoreResult<()> {
        let mut events = self.events.write().map_err(|_err| StoreError::Poisoned)?;
        events.push(event);
        tracing::debug!(total = events.len(), "Stored submitted event");
        Ok(())
    }

    #[tracing::instrument(skip(self, api_key))]
    fn approve(&self, id: Uuid, api_key: Uuid) -> StoreResult<()> {
        let mut events = self.events.write().map_err(|_err| StoreError::Poisoned)?;
        let event = events
            .iter_mut()
            .find(|event| event.id == id && event.api_key == api_key)
            .ok_or_else(|| StoreError::EventNotFound(id))?;
        event.approved = true;
        tracing::info!(event_id = %id, "Event approved");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn upcoming(&self, window: &DateWindow, limit: usize) -> StoreResult<Vec<Event>> {
        let events = self.events.read().map_err(|_err| StoreError::Poisoned)?;
        let mut selected: Vec<Event> = events
            .iter()
            .filter(|event| event.approved && window.overlaps(event.start_date, event.end_date))
            .cloned()
            .collect();
        // Stable sort; ties keep submission order.
        selected.sort_by_key(|event| event.start_date);
        selected.truncate(limit);
        Ok(selected)
    }
}
