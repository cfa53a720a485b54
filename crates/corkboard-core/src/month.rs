use chrono::{Datelike, NaiveDate};

/// Calendar year-month pair identifying one export bucket.
///
/// Ordering is calendar order; `Display` renders the canonical `YYYY-MM`
/// form used in bucket file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// `month` is expected to be 1 through 12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The following calendar month, rolling December into January.
    #[must_use]
    pub const fn succ(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Every month from `start`'s month through `end`'s month inclusive.
    /// Empty when `end` falls in an earlier month than `start`.
    #[must_use]
    pub fn span(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = Self> {
        let mut next = Self::of(start);
        let last = Self::of(end);
        std::iter::from_fn(move || {
            if next > last {
                return None;
            }
            let current = next;
            next = next.succ();
            Some(current)
        })
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
