//! Placeholder locations endpoint; the live path has no locations store.

use salvo::writing::Json;
use salvo::{Response, Router, handler};
use serde_json::json;

use corkboard_core::constants::LOCATIONS_ROUTE_COMPONENT;

/// Always an empty array, kept for consumers that poll both datasets.
#[handler]
async fn locations_handler(res: &mut Response) {
    res.render(Json(json!([])));
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(LOCATIONS_ROUTE_COMPONENT).get(locations_handler))
        .push(Router::with_path("locations.json").get(locations_handler))
}
