mod events;
mod heartbeat;

use salvo::Router;

// Re-export route constants from core
pub use corkboard_core::constants::{
    APPROVE_ROUTE_PREFIX, EVENTS_ROUTE_COMPONENT, EVENTS_ROUTE_PREFIX, HEARTBEAT_ROUTE_PREFIX,
    SUBMIT_ROUTE_PREFIX, UPCOMING_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main router: the liveness probe at the root and the
/// events API beneath it.
#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(heartbeat::routes())
        .push(events::routes())
}
