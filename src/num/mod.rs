//! Number wrappers and the tolerances used to compare them.
//!
//! Every [`Number`] type gets the same set of operations through a single generic impl on
//! [`Wrap`](crate::Wrap). The per type aliases ([`IntWrap`], [`DoubleWrap`], ...) exist for
//! naming only.

#[cfg(feature = "decimal")]
pub mod decimals;
mod number;
mod number_wrap;
mod offset;
mod tests;

pub use number::*;
pub use number_wrap::*;
pub use offset::*;
