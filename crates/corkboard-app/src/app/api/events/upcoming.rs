//! Upcoming-events handlers: the JSON variant and the two feed envelopes.

use salvo::http::HeaderValue;
use salvo::writing::Json;
use salvo::{Depot, Request, Response, Router, handler};

use corkboard_core::clock::SystemClock;
use corkboard_core::constants::UPCOMING_ROUTE_COMPONENT;
use corkboard_feed::FeedType;
use corkboard_service::upcoming::{UpcomingParams, render_upcoming_feed, select_upcoming};

use crate::config::get_config_from_depot;
use crate::error::render_error;
use crate::store_handler::get_store_from_depot;

fn query_params(req: &Request) -> UpcomingParams {
    UpcomingParams {
        start: req.query("start"),
        end: req.query("end"),
        limit: req.query("limit"),
    }
}

/// ## Summary
/// Returns the approved events overlapping the requested window as a JSON
/// array, ascending by start date.
///
/// ## Errors
/// Returns HTTP 400 when `start`, `end`, or `limit` do not parse.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn upcoming_events(req: &mut Request, depot: &Depot, res: &mut Response) {
    let params = query_params(req);

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };

    match select_upcoming(store.as_ref(), &SystemClock, &params) {
        Ok(events) => res.render(Json(events)),
        Err(e) => render_error(res, &e.into()),
    }
}

/// Both feed variants share the selection; only the envelope and the
/// content type differ.
fn render_feed(req: &Request, depot: &Depot, res: &mut Response, feed_type: FeedType) {
    let params = query_params(req);

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };
    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            render_error(res, &e);
            return;
        }
    };

    match render_upcoming_feed(store.as_ref(), &SystemClock, &settings, &params, feed_type) {
        Ok(xml) => {
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Header addition failure is non-fatal"
            )]
            let _ = res.add_header(
                "Content-Type",
                HeaderValue::from_static(feed_type.content_type()),
                true,
            );
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Write body failure is non-fatal"
            )]
            let _ = res.write_body(xml);
        }
        Err(e) => render_error(res, &e.into()),
    }
}

/// ## Summary
/// Returns the upcoming selection as an Atom feed.
///
/// ## Errors
/// Returns HTTP 400 when `start`, `end`, or `limit` do not parse.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn upcoming_atom(req: &mut Request, depot: &Depot, res: &mut Response) {
    render_feed(req, depot, res, FeedType::Atom);
}

/// ## Summary
/// Returns the upcoming selection as an RSS 2.0 feed.
///
/// ## Errors
/// Returns HTTP 400 when `start`, `end`, or `limit` do not parse.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
async fn upcoming_rss(req: &mut Request, depot: &Depot, res: &mut Response) {
    render_feed(req, depot, res, FeedType::Rss);
}

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(Router::with_path(UPCOMING_ROUTE_COMPONENT).get(upcoming_events))
        .push(Router::with_path("upcoming.json").get(upcoming_events))
        .push(Router::with_path("upcoming.atom").get(upcoming_atom))
        .push(Router::with_path("upcoming.rss").get(upcoming_rss))
}
