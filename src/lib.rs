//! This crate is my attempt at a fluent, absence tolerant wrapper around everyday values.
//!
//! # Purpose
//! A lot of day to day code is the same three lines over and over: check that something is
//! there, check that it is what you expect, then do something with it. This crate puts a [`Wrap`]
//! around a value that may or may not be present and hangs those checks and edits off it as
//! chainable methods, so the absence checks disappear from the calling code.
//!
//! ```
//! # use fluent_wrap::{wrap, prelude::*};
//! let mut names = wrap(vec!["ada", "grace", "barbara"]);
//! names.remove_if(|name| name.len() > 5).push("linus");
//! assert_eq!(names.to_string(), "[ada, grace, linus]");
//!
//! let missing = fluent_wrap::StringWrap::none();
//! assert!(missing.is_null_or_empty());
//! assert!(!missing.starts_with("a"));
//! ```
//!
//! # Method
//! There is exactly one wrapper type, [`Wrap<T>`], and what it can do depends on `T`. The
//! operations every wrapper shares live on the generic impl, while strings, numbers, sequences,
//! predicates, streams, dates and paths each get their own inherent impl. The aliases
//! ([`StringWrap`], [`ListWrap`], [`IntWrap`], ...) only exist to give those instantiations a
//! name.
//!
//! Behind every wrapper method sits a free helper function over [`Option`]s (see
//! [`text::strings`], [`collections::slices`], [`num::decimals`] and friends), so the same
//! behaviour is available without wrapping anything. Absent values are handled the same way
//! everywhere: queries answer false, edits leave the absence in place and a few documented
//! operations create the value instead.
//!
//! Wrapping a wrapper is not something I could think of a use for, so it doesn't compile. See
//! [`Wrappable`].
//!
//! # Error Handling
//! Fallible operations return [`Result`]s with small, strongly typed errors from [`error`], all of
//! which convert into [`WrapError`](error::WrapError) for callers that want a single type. The
//! few constructors that panic on invalid input (like [`num::Offset::new`]) have a `try_` twin
//! that doesn't.
//!
//! Absent primitive values that have to become a real value, like a missing character, are
//! resolved by the null rule in [`nulls`], which can be swapped for the whole process.
//!
//! # Dependencies
//! Errors are derived with `derive_more` and side effects are reported as `tracing` events, so
//! nothing gets printed unless a subscriber is installed. Shuffling uses `rand`.
//!
//! The rest is optional, and all of it is enabled by default:
//! - `json`: JSON conversion of any `serde` value through `serde_json`.
//! - `time`: the [`DateWrap`] over `chrono` dates.
//! - `decimal`: the [`DecimalWrap`] over `rust_decimal` decimals.
//! - `fs`: the [`PathWrap`] and filesystem helpers, which use `libc` for access checks.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod error;
#[cfg(all(feature = "fs", unix))]
pub mod fs;
pub mod nulls;
pub mod num;
pub mod optional;
pub mod text;
#[cfg(feature = "time")]
pub mod time;

pub(crate) mod util;
mod wrap;

pub use collections::{ArrayWrap, ListWrap, PredicateWrap, StreamWrap, SupplierWrap};
#[cfg(all(feature = "fs", unix))]
pub use fs::PathWrap;
#[cfg(feature = "decimal")]
pub use num::DecimalWrap;
pub use num::{DoubleWrap, FloatWrap, IntWrap, LongWrap};
pub use text::StringWrap;
#[cfg(feature = "time")]
pub use time::DateWrap;
pub use wrap::{IntoWrap, Represent, Wrap, Wrappable, wrap};

/// The traits needed to call every wrapper operation, along with [`wrap`].
pub mod prelude {
    pub use crate::collections::{Enumerable, IndexedEnumerable, MutableEnumerable};
    pub use crate::optional::OptionalBool;
    pub use crate::wrap::{IntoWrap, wrap};
}

/// A one line description of this build of the crate.
///
/// ```
/// assert!(fluent_wrap::about().starts_with("fluent-wrap "));
/// ```
pub fn about() -> String {
    format!(
        "{} {} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    )
}
