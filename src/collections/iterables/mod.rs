//! Helpers over any possibly absent [`IntoIterator`]. An absent iterable is treated as an empty
//! one throughout.

mod iterables;

pub use iterables::*;
