//! Live events API: public queries plus the submission/approval flow.

mod approve;
mod locations;
mod submit;
mod upcoming;

use salvo::Router;

use corkboard_core::constants::EVENTS_ROUTE_COMPONENT;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(EVENTS_ROUTE_COMPONENT)
        .push(upcoming::routes())
        .push(submit::routes())
        .push(approve::routes())
        .push(locations::routes())
}
