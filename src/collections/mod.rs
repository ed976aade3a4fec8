//! Wrappers and helpers for sequences, predicates and streams.
//!
//! # Method
//! Every wrapper here forwards to a free helper function in its module, which guards against
//! absence and then defers to [`std`]. The helpers are public, so the same absence tolerant
//! behaviour is available without wrapping anything.
//!
//! [`ArrayWrap`] and [`ListWrap`] share their positional and mutating operations through the
//! [`Enumerable`], [`IndexedEnumerable`] and [`MutableEnumerable`] traits.

pub mod iterables;
pub mod lists;
pub mod predicates;
pub mod slices;
pub mod splice;
pub mod streams;
pub mod traits;

pub use lists::ListWrap;
pub use predicates::{Predicate, PredicateWrap};
pub use slices::ArrayWrap;
pub use splice::Spliced;
pub use streams::{Stream, StreamWrap, Supplier, SupplierWrap};
pub use traits::{Enumerable, IndexedEnumerable, MutableEnumerable};
