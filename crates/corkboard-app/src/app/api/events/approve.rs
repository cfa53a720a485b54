//! Event approval via the per-event api-key link.

use salvo::http::StatusCode;
use salvo::writing::{Json, Text};
use salvo::{Depot, Request, Response, Router, handler};
use uuid::Uuid;

use corkboard_core::constants::APPROVE_ROUTE_COMPONENT;
use corkboard_service::approval::approve_event;

use crate::error::{ErrorResponse, render_error};
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Approves the event named in the path when the `api_key` query parameter
/// matches its stored key; re-approval is a no-op success.
///
/// An id that is not a uuid cannot name a stored event, so it gets the same
/// 404 as an unknown one.
///
/// ## Errors
/// Returns HTTP 401 when the key is missing and HTTP 404 when the id/key
/// pair does not match a stored event.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn approve_handler(req: &mut Request, depot: &Depot, res: &mut Response) {
    let Some(id_text) = req.param::<String>("id") else {
        res.status_code(StatusCode::NOT_FOUND);
        res.render(Json(ErrorResponse {
            error: "No such event".to_owned(),
        }));
        return;
    };

    let Ok(id) = Uuid::parse_str(&id_text) else {
        tracing::debug!(id = %id_text, "Approval target is not a uuid");
        res.status_code(StatusCode::NOT_FOUND);
        res.render(Json(ErrorResponse {
            error: "No such event".to_owned(),
        }));
        return;
    };

    let api_key = req.query::<String>("api_key");

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };

    match approve_event(store.as_ref(), id, api_key.as_deref()) {
        Ok(()) => {
            tracing::info!(event_id = %id, "Event approved");
            res.render(Text::Plain("OK"));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(APPROVE_ROUTE_COMPONENT).push(Router::with_path("{id}").get(approve_handler))
}
