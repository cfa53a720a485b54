//! Event submission handler.

use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};
use serde_json::json;

use corkboard_core::constants::SUBMIT_ROUTE_COMPONENT;
use corkboard_service::submission::{SubmissionForm, submit_event};

use crate::error::render_error;
use crate::notifier_handler::get_notifier_from_depot;
use crate::store_handler::get_store_from_depot;

/// ## Summary
/// Accepts the submission form and stores the event unapproved.
///
/// ## Side Effects
/// - Inserts into the event store
/// - Spawns the webhook announcement when one is configured
///
/// ## Errors
/// Returns HTTP 400 when a field is missing, blank, or malformed.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn submit_handler(req: &mut Request, depot: &Depot, res: &mut Response) {
    let form = SubmissionForm {
        title: req.form("title").await,
        description: req.form("description").await,
        location_text: req.form("location_text").await,
        start_date: req.form("start_date").await,
        end_date: req.form("end_date").await,
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };
    let notifier = match get_notifier_from_depot(depot) {
        Ok(notifier) => notifier,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };

    match submit_event(store.as_ref(), &form) {
        Ok(event) => {
            tracing::info!(event_id = %event.id, title = %event.title, "Submission stored");
            notifier.announce(&event);
            res.render(Json(json!({"message": "Thank you for the submission!"})));
        }
        Err(e) => render_error(res, &e.into()),
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(SUBMIT_ROUTE_COMPONENT).post(submit_handler))
        .push(Router::with_path("submit.json").post(submit_handler))
}
