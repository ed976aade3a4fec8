//! Strings: helper functions, the [`StringWrap`] wrapper and the [`StringList`] builder.
//!
//! [`strings`] holds the whole-string operations (prefixes, splitting, trimming, comparison) and
//! [`chars`] the character level ones. Both count characters rather than bytes, and both treat
//! [`None`] as the absent string.

pub mod chars;
mod string_list;
mod string_wrap;
pub mod strings;
mod tests;

pub use string_list::*;
pub use string_wrap::*;
