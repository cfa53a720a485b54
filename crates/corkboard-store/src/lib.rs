//! Event storage seam.
//!
//! The live path only ever talks to [`EventStore`]; a database-backed
//! implementation would slot in behind the same trait. Reads are synchronous
//! and fast relative to request latency, so the trait stays sync.

use corkboard_core::event::Event;
use corkboard_core::window::DateWindow;
use thiserror::Error;
use uuid::Uuid;

pub mod memory;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

pub trait EventStore: Send + Sync {
    /// ## Summary
    /// Stores a freshly submitted event.
    ///
    /// ## Errors
    /// Returns an error if the store is unavailable.
    fn insert(&self, event: Event) -> StoreResult<()>;

    /// ## Summary
    /// Marks the event matching both `id` and `api_key` as approved.
    /// Approving an already approved event is a no-op success.
    ///
    /// ## Errors
    /// Returns [`StoreError::EventNotFound`] when no event matches the pair.
    fn approve(&self, id: Uuid, api_key: Uuid) -> StoreResult<()>;

    /// ## Summary
    /// Returns approved events overlapping `window`, ascending by start
    /// date, truncated to `limit`. Events sharing a start date keep their
    /// submission order.
    ///
    /// ## Errors
    /// Returns an error if the store is unavailable.
    fn upcoming(&self, window: &DateWindow, limit: usize) -> StoreResult<Vec<Event>>;
}
