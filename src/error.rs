//! Error types returned by wrappers and helpers.
//!
//! As elsewhere in this crate, each failure is a small struct implementing [`Error`], and the
//! failures an operation can produce are combined into enums for static dispatch. Absence on its
//! own is never an error: these types only show up when a caller forces a value out of an empty
//! wrapper, or when the underlying std call fails.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// Returned when the value of an absent wrapper is forced out.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("wrapped value is absent")]
pub struct AbsentValue;

/// Returned by the undefined null rule whenever it is asked to substitute an absent value.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("value is undefined")]
pub struct UndefinedValue;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOffset {
    #[display("offset must not be negative")]
    Negative,
    #[display("strict offset must be greater than zero")]
    NotStrictlyPositive,
}

/// A failure of the underlying filesystem call.
#[derive(Debug, Display, Error, From)]
#[display("i/o failure: {_0}")]
pub struct IoError(#[error(source)] pub io::Error);

/// A failure while converting a wrapped value to or from JSON.
#[cfg(feature = "json")]
#[derive(Debug, Display, Error, From)]
#[display("json failure: {_0}")]
pub struct JsonError(#[error(source)] pub serde_json::Error);

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum WrapError {
    Absent(AbsentValue),
    IndexOutOfBounds(IndexOutOfBounds),
    InvalidOffset(InvalidOffset),
    Undefined(UndefinedValue),
    Io(IoError),
    #[cfg(feature = "json")]
    Json(JsonError),
}

impl From<io::Error> for WrapError {
    fn from(value: io::Error) -> Self {
        IoError(value).into()
    }
}
