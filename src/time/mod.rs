//! Calendar date helpers and the [`DateWrap`] wrapper, built on [`chrono`].
//!
//! Dates are [`NaiveDate`](chrono::NaiveDate)s. "Today" is the current date in the local time
//! zone.

pub mod dates;
mod date_wrap;
mod tests;

pub use date_wrap::*;
