use salvo::{Router, handler};

use corkboard_core::constants::HEARTBEAT_ROUTE_COMPONENT;

#[handler]
async fn heartbeat() -> &'static str {
    "ok"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(HEARTBEAT_ROUTE_COMPONENT).get(heartbeat)
}
