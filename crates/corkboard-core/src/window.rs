//! Date-window parsing and the overlap rule shared by the live query path
//! and the static export path.

use chrono::{Months, NaiveDate};

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};

/// Textual date format accepted by the live query parameters.
pub const WINDOW_DATE_FORMAT: &str = "%Y/%m/%d";

/// Calendar months covered by a window when no end date is supplied.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

/// Maximum number of events a selection returns when no limit is supplied.
pub const DEFAULT_LIMIT: usize = 60;

/// An inclusive date range scoping a query or feed.
///
/// No ordering between `start` and `end` is enforced; an inverted window is
/// legal and simply selects next to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// ## Summary
    /// Builds a window from optional `YYYY/MM/DD` strings, defaulting to
    /// today through today plus [`DEFAULT_WINDOW_MONTHS`] calendar months.
    /// Month addition clamps the day to the target month's length and rolls
    /// over year boundaries.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidWindow`] when a supplied string does not
    /// parse; absent parameters never error.
    pub fn from_params(
        start: Option<&str>,
        end: Option<&str>,
        clock: &dyn Clock,
    ) -> CoreResult<Self> {
        let today = clock.today();
        let start = match start {
            Some(raw) => parse_window_date(raw)?,
            None => today,
        };
        let end = match end {
            Some(raw) => parse_window_date(raw)?,
            None => add_months(today, DEFAULT_WINDOW_MONTHS),
        };
        Ok(Self { start, end })
    }

    /// True when the span `[start_date, end_date]` touches this window.
    /// Both comparisons are inclusive.
    #[must_use]
    pub fn overlaps(&self, start_date: NaiveDate, end_date: NaiveDate) -> bool {
        start_date <= self.end && end_date >= self.start
    }
}

/// ## Summary
/// Coerces the textual `limit` parameter, defaulting to [`DEFAULT_LIMIT`].
///
/// ## Errors
/// Returns [`CoreError::InvalidWindow`] when the text is not an unsigned
/// integer; a missing parameter is not an error.
pub fn parse_limit(raw: Option<&str>) -> CoreResult<usize> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|err| CoreError::InvalidWindow(format!("bad limit {raw:?}: {err}"))),
        None => Ok(DEFAULT_LIMIT),
    }
}

fn parse_window_date(raw: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, WINDOW_DATE_FORMAT)
        .map_err(|err| CoreError::InvalidWindow(format!("bad date {raw:?}: {err}")))
}

// Saturates at the calendar edge instead of failing; unreachable for any
// realistic "today".
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
