//! Absence tolerant helpers over slices and boxed slices.
//!
//! Readers take an `Option<&[E]>` and find nothing in an absent slice. Writers take the mutable
//! counterpart and leave an absent slice alone. Helpers that change the length of a boxed slice
//! reallocate it.

mod array_wrap;
mod slices;

pub use array_wrap::*;
pub use slices::*;
