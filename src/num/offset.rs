use std::cmp::Ordering;

use crate::error::InvalidOffset;
use crate::num::Number;
use crate::util::result::ResultExtension;

/// The tolerance used by [`is_close_to`](crate::Wrap::is_close_to).
///
/// A regular offset accepts differences up to and including its value, while a strict one only
/// accepts differences below it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Offset<N> {
    value: N,
    strict: bool,
}

impl<N: Number> Offset<N> {
    /// Creates an offset accepting differences up to and including `value`.
    ///
    /// # Panics
    /// Panics if `value` is negative. See [`Offset::try_new`] for a checked version.
    pub fn new(value: N) -> Offset<N> {
        Offset::try_new(value).throw()
    }

    /// Creates an offset accepting differences up to and including `value`.
    ///
    /// # Errors
    /// Returns [`InvalidOffset::Negative`] if `value` is negative or not a number.
    pub fn try_new(value: N) -> Result<Offset<N>, InvalidOffset> {
        if value.partial_cmp(&N::ZERO).is_none_or(Ordering::is_lt) {
            return Err(InvalidOffset::Negative);
        }

        Ok(Offset {
            value,
            strict: false,
        })
    }

    /// Creates an offset accepting differences strictly below `value`.
    ///
    /// # Panics
    /// Panics if `value` isn't greater than zero. See [`Offset::try_strict`] for a checked
    /// version.
    pub fn strict(value: N) -> Offset<N> {
        Offset::try_strict(value).throw()
    }

    /// Creates an offset accepting differences strictly below `value`.
    ///
    /// # Errors
    /// Returns [`InvalidOffset::NotStrictlyPositive`] if `value` isn't greater than zero.
    pub fn try_strict(value: N) -> Result<Offset<N>, InvalidOffset> {
        if value.partial_cmp(&N::ZERO).is_none_or(Ordering::is_le) {
            return Err(InvalidOffset::NotStrictlyPositive);
        }

        Ok(Offset {
            value,
            strict: true,
        })
    }

    pub const fn value(&self) -> N {
        self.value
    }

    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns true if a difference of `distance` falls within this offset.
    pub fn accepts(&self, distance: N) -> bool {
        if self.strict {
            distance < self.value
        } else {
            distance <= self.value
        }
    }
}

/// A tolerance relative to the expected value, used by
/// [`is_close_to_percentage`](crate::Wrap::is_close_to_percentage).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percentage {
    value: f64,
}

impl Percentage {
    /// # Panics
    /// Panics if `value` is negative. See [`Percentage::try_new`] for a checked version.
    pub fn new(value: f64) -> Percentage {
        Percentage::try_new(value).throw()
    }

    /// # Errors
    /// Returns [`InvalidOffset::Negative`] if `value` is negative or not a number.
    pub fn try_new(value: f64) -> Result<Percentage, InvalidOffset> {
        if value.partial_cmp(&0.0).is_none_or(Ordering::is_lt) {
            return Err(InvalidOffset::Negative);
        }

        Ok(Percentage { value })
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The largest difference from `expected` this percentage tolerates.
    pub fn of(&self, expected: f64) -> f64 {
        (self.value * expected / 100.0).abs()
    }
}
