//! The core [`Wrap`] type, its factories and the operations shared by every wrapper.
//!
//! A wrapper is made with [`wrap`] (or [`Wrap::of`] / [`Wrap::none`]) and exposes a different
//! set of operations depending on what it holds. The pieces in this module are available on every
//! instantiation: absence routing, equality, hashing, display, ordering for [`PartialOrd`] values
//! and, behind the `json` feature, JSON conversion for `serde` values.

mod comparable;
mod factory;
#[cfg(feature = "json")]
mod json;
mod represent;
mod wrap;

pub use factory::*;
pub use represent::*;
pub use wrap::*;
