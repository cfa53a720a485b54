use chrono::{NaiveDate, Utc};

/// Source of "today" for window defaulting and feed timestamps.
///
/// Injected rather than read ambiently so selection and rendering are
/// deterministic under test.
pub trait Clock: Send + Sync {
    #[must_use]
    fn today(&self) -> NaiveDate;
}

/// Wall-clock backed [`Clock`] used by the binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// [`Clock`] pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
