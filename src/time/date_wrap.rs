use chrono::{Duration, NaiveDate};

use crate::time::dates;
use crate::wrap::Wrap;

/// A wrapped [`NaiveDate`].
///
/// ```
/// # use fluent_wrap::{wrap, time::dates};
/// # use chrono::Duration;
/// let deadline = wrap(dates::tomorrow());
/// assert!(deadline.is_tomorrow());
/// assert!(deadline.is_after(dates::today()));
/// assert!(deadline.is_close_to(dates::yesterday(), Duration::days(2)));
/// ```
pub type DateWrap = Wrap<NaiveDate>;

impl Wrap<NaiveDate> {
    pub fn is_before(&self, other: impl Into<Option<NaiveDate>>) -> bool {
        dates::is_before(self.value, other.into())
    }

    pub fn is_after(&self, other: impl Into<Option<NaiveDate>>) -> bool {
        dates::is_after(self.value, other.into())
    }

    pub fn is_today(&self) -> bool {
        dates::is_today(self.value)
    }

    pub fn is_yesterday(&self) -> bool {
        dates::is_yesterday(self.value)
    }

    pub fn is_tomorrow(&self) -> bool {
        dates::is_tomorrow(self.value)
    }

    /// Returns true if the dates are at most `offset` apart, counted in whole days. Any part of
    /// `offset` smaller than a day is ignored, and a negative `offset` accepts nothing.
    pub fn is_close_to(&self, other: impl Into<Option<NaiveDate>>, offset: Duration) -> bool {
        match (self.value, other.into()) {
            (Some(date), Some(other)) if offset >= Duration::zero() => {
                dates::days_between(date, other) <= offset.num_days()
            },
            _ => false,
        }
    }
}
