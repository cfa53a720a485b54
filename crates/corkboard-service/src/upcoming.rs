//! Upcoming-event selection and feed rendering.

use corkboard_core::clock::Clock;
use corkboard_core::config::Settings;
use corkboard_core::constants::UPCOMING_ROUTE_PREFIX;
use corkboard_core::event::{Event, PublicEvent};
use corkboard_core::window::{self, DateWindow};
use corkboard_feed::FeedType;
use corkboard_feed::entry::{Feed, FeedMeta};
use corkboard_store::EventStore;

use crate::error::ServiceResult;

/// Raw query parameters as received on the wire.
#[derive(Debug, Clone, Default)]
pub struct UpcomingParams {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<String>,
}

/// ## Summary
/// Selects the approved events overlapping the requested window, ascending
/// by start date, truncated to the requested limit. Window and limit default
/// when absent; an empty selection is a valid result, not an error.
///
/// ## Errors
/// Returns an invalid-window error when a supplied date or limit does not
/// parse, or a store error when the read fails.
#[tracing::instrument(skip(store, clock))]
pub fn select_upcoming(
    store: &dyn EventStore,
    clock: &dyn Clock,
    params: &UpcomingParams,
) -> ServiceResult<Vec<PublicEvent>> {
    let window = DateWindow::from_params(params.start.as_deref(), params.end.as_deref(), clock)?;
    let limit = window::parse_limit(params.limit.as_deref())?;

    let events = store.upcoming(&window, limit)?;
    tracing::debug!(
        count = events.len(),
        start = %window.start,
        end = %window.end,
        "Selected upcoming events"
    );

    Ok(events.iter().map(Event::to_public).collect())
}

/// ## Summary
/// Renders the upcoming selection as a feed. Entries follow selection order;
/// feed metadata comes from configuration and the build stamp from the
/// injected clock.
///
/// ## Errors
/// Returns the same errors as [`select_upcoming`], plus a feed error when
/// XML writing fails.
#[tracing::instrument(skip(store, clock, settings))]
pub fn render_upcoming_feed(
    store: &dyn EventStore,
    clock: &dyn Clock,
    settings: &Settings,
    params: &UpcomingParams,
    feed_type: FeedType,
) -> ServiceResult<String> {
    let events = select_upcoming(store, clock, params)?;

    let self_url = format!(
        "{}{}.{}",
        settings.server.origin(),
        UPCOMING_ROUTE_PREFIX,
        feed_type.extension()
    );
    let meta = FeedMeta::from_config(&settings.feed, self_url);
    let feed = Feed::from_events(meta, clock.today(), &events);

    Ok(feed_type.serialize(&feed)?)
}
