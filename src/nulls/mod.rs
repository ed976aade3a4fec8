//! The null rule: a pluggable policy for absent primitive values.
//!
//! One rule is in effect for the whole process and can be swapped with [`set_rule`]. Tests and
//! other scoped callers can use [`with_rule`] instead, which only affects the current thread.

mod rule;
mod tests;

pub use rule::*;
