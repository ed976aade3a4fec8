//! Filesystem queries and the [`PathWrap`] wrapper.
//!
//! Everything here is a direct, synchronous call against the filesystem. Queries answer false when
//! the path is absent or the filesystem can't be read, while operations that change something
//! report an [`IoError`](crate::error::IoError).

pub mod files;
mod path_wrap;
mod syscall;

pub use path_wrap::*;
