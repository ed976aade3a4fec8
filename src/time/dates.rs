//! Absence tolerant date helpers. Comparing against an absent date is always false.

use chrono::{Local, NaiveDate};

pub fn is_before(date: Option<NaiveDate>, other: Option<NaiveDate>) -> bool {
    matches!((date, other), (Some(date), Some(other)) if date < other)
}

pub fn is_after(date: Option<NaiveDate>, other: Option<NaiveDate>) -> bool {
    matches!((date, other), (Some(date), Some(other)) if date > other)
}

pub fn is_today(date: Option<NaiveDate>) -> bool {
    date == Some(today())
}

pub fn is_yesterday(date: Option<NaiveDate>) -> bool {
    date == Some(yesterday())
}

pub fn is_tomorrow(date: Option<NaiveDate>) -> bool {
    date == Some(tomorrow())
}

/// The current date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    today().succ_opt().unwrap_or(NaiveDate::MAX)
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Returns the number of whole days between two dates, ignoring which one comes first.
pub fn days_between(date: NaiveDate, other: NaiveDate) -> i64 {
    date.signed_duration_since(other).num_days().abs()
}
