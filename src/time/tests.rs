#![cfg(test)]

use chrono::{Duration, NaiveDate};

use super::*;
use crate::wrap::wrap;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_relative_days() {
    assert_eq!(dates::tomorrow() - dates::today(), Duration::days(1));
    assert_eq!(dates::today() - dates::yesterday(), Duration::days(1));

    assert!(wrap(dates::today()).is_today());
    assert!(wrap(dates::yesterday()).is_yesterday());
    assert!(wrap(dates::tomorrow()).is_tomorrow());
    assert!(!wrap(dates::tomorrow()).is_today());

    let absent = DateWrap::none();
    assert!(!absent.is_today());
    assert!(!absent.is_yesterday());
    assert!(!absent.is_tomorrow());
}

#[test]
fn test_before_after() {
    let new_year = wrap(date(2024, 1, 1));

    assert!(new_year.is_before(date(2024, 1, 2)));
    assert!(!new_year.is_before(date(2024, 1, 1)));
    assert!(new_year.is_after(date(2023, 12, 31)));
    assert!(!new_year.is_after(date(2024, 1, 1)));

    assert!(!new_year.is_before(None));
    assert!(!new_year.is_after(None));
    assert!(!DateWrap::none().is_before(date(2024, 1, 1)));
    assert!(!dates::is_after(None, None));
}

#[test]
fn test_close_to() {
    let leap_day = wrap(date(2024, 2, 29));

    assert!(leap_day.is_close_to(date(2024, 3, 2), Duration::days(2)));
    assert!(leap_day.is_close_to(date(2024, 2, 27), Duration::days(2)));
    assert!(!leap_day.is_close_to(date(2024, 3, 3), Duration::days(2)));
    assert!(
        !leap_day.is_close_to(date(2024, 3, 1), Duration::hours(23)),
        "Offsets should be counted in whole days."
    );
    assert!(leap_day.is_close_to(date(2024, 2, 29), Duration::zero()));
    assert!(!leap_day.is_close_to(date(2024, 2, 29), Duration::days(-1)));

    assert!(!leap_day.is_close_to(None, Duration::days(365)));
    assert!(!DateWrap::none().is_close_to(date(2024, 2, 29), Duration::days(365)));
}

#[test]
fn test_days_between() {
    assert_eq!(dates::days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
    assert_eq!(dates::days_between(date(2025, 1, 1), date(2024, 1, 1)), 366);
}

#[test]
fn test_comparison() {
    let midsummer = wrap(date(2020, 6, 15));

    assert!(midsummer.is_less_than(&NaiveDate::MAX));
    assert!(midsummer.is_equal_to(&date(2020, 6, 15)));
    assert_eq!(midsummer.as_string().into_inner().as_deref(), Some("2020-06-15"));
}
