//! Extensions for [`Option`]s of values that have no wrapper of their own.

mod optional_bool;

pub use optional_bool::*;
