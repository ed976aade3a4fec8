//! Helpers for [`Decimal`] values.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::num::Number;
use crate::wrap::Wrap;

/// Converts any [`Number`] to a [`Decimal`].
///
/// ```
/// # use fluent_wrap::num::decimals;
/// # use rust_decimal::Decimal;
/// assert_eq!(decimals::to_decimal(Some(0.1)), Decimal::from_str_exact("0.1").ok());
/// assert_eq!(decimals::to_decimal(Some(f64::NAN)), None);
/// assert_eq!(decimals::to_decimal(None::<i32>), None);
/// ```
pub fn to_decimal<N: Number>(value: Option<N>) -> Option<Decimal> {
    value?.to_decimal()
}

/// Returns true if `value` parses as a decimal number, in plain or scientific notation.
pub fn is_number(value: Option<&str>) -> bool {
    value.is_some_and(|value| {
        Decimal::from_str(value).is_ok() || Decimal::from_scientific(value).is_ok()
    })
}

pub fn negate(value: Option<Decimal>) -> Option<Decimal> {
    value.map(|value| -value)
}

/// Returns the remainder of `value` divided by `divisor`, which takes the sign of `value`.
/// There is no remainder when either is absent or `divisor` is zero.
pub fn rem(value: Option<Decimal>, divisor: Option<Decimal>) -> Option<Decimal> {
    value?.checked_rem(divisor?)
}

impl Wrap<Decimal> {
    /// Flips the sign of the held decimal.
    pub fn negate(&mut self) -> &mut Self {
        self.value = negate(self.value);
        self
    }

    /// Replaces the held decimal with its remainder by `divisor`. The decimal becomes absent if
    /// `divisor` is zero.
    pub fn rem(&mut self, divisor: Decimal) -> &mut Self {
        self.value = rem(self.value, Some(divisor));
        self
    }
}
