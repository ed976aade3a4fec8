//! Absence tolerant helpers over vectors, and the [`ListWrap`] built on them.
//!
//! Unlike their [`slices`](super::slices) counterparts, the growing helpers here start a new list
//! when handed an absent one.

mod list_wrap;
mod lists;

pub use list_wrap::*;
pub use lists::*;
