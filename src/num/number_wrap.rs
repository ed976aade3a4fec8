#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

use crate::num::{Number, Offset, Percentage};
use crate::wrap::Wrap;

pub type IntWrap = Wrap<i32>;
pub type LongWrap = Wrap<i64>;
pub type FloatWrap = Wrap<f32>;
pub type DoubleWrap = Wrap<f64>;
#[cfg(feature = "decimal")]
pub type DecimalWrap = Wrap<Decimal>;

fn between<N: Number>(value: N, a: N, b: N, inclusive: bool) -> bool {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    if inclusive {
        low <= value && value <= high
    } else {
        low < value && value < high
    }
}

/// The absolute difference as an [`f64`], which stays positive when it overflows `N`.
fn spread<N: Number>(value: N, other: N) -> f64 {
    match value.distance(other) {
        Some(distance) => distance.to_f64(),
        None => (value.to_f64() - other.to_f64()).abs(),
    }
}

/// Operations on wrapped numbers.
///
/// Sign checks answer false for an absent number, except for
/// [`is_not_negative`](Wrap::is_not_negative) and [`is_not_positive`](Wrap::is_not_positive),
/// which hold for it.
///
/// ```
/// # use fluent_wrap::{wrap, num::Offset};
/// let answer = wrap(42);
/// assert!(answer.is_even() && answer.is_positive());
/// assert!(answer.is_close_to(40, Offset::new(2)));
/// assert!(!answer.is_close_to(40, Offset::strict(2)));
/// assert!(answer.is_between(50, 40));
/// ```
impl<N: Number> Wrap<N> {
    pub fn is_even(&self) -> bool {
        self.value
            .is_some_and(|value| value.magnitude().remainder(N::TWO) == N::ZERO)
    }

    pub fn is_odd(&self) -> bool {
        self.is_not_null() && !self.is_even()
    }

    pub fn is_positive(&self) -> bool {
        self.is_greater_than(&N::ZERO)
    }

    pub fn is_negative(&self) -> bool {
        self.is_less_than(&N::ZERO)
    }

    pub fn is_not_negative(&self) -> bool {
        self.is_null() || self.is_greater_than_or_equal_to(&N::ZERO)
    }

    pub fn is_not_positive(&self) -> bool {
        self.is_null() || self.is_less_than_or_equal_to(&N::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.is_equal_to(&N::ZERO)
    }

    pub fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.is_equal_to(&N::ONE)
    }

    /// Returns true if the number lies between `a` and `b` inclusive, in either order.
    pub fn is_between(&self, a: N, b: N) -> bool {
        self.value.is_some_and(|value| between(value, a, b, true))
    }

    /// Returns true if the number lies between `a` and `b` exclusive, in either order.
    pub fn is_strictly_between(&self, a: N, b: N) -> bool {
        self.value.is_some_and(|value| between(value, a, b, false))
    }

    /// Returns true if the number differs from `other` by no more than `offset` allows. Equal
    /// numbers are always close, and an absence on either side never is.
    pub fn is_close_to(&self, other: impl Into<Option<N>>, offset: Offset<N>) -> bool {
        match (self.value, other.into()) {
            (Some(value), Some(other)) if value == other => true,
            (Some(value), Some(other)) => value
                .distance(other)
                .is_some_and(|distance| offset.accepts(distance)),
            _ => false,
        }
    }

    /// The negation of [`is_close_to`](Wrap::is_close_to), so an absence on either side counts
    /// as not close.
    pub fn is_not_close_to(&self, other: impl Into<Option<N>>, offset: Offset<N>) -> bool {
        !self.is_close_to(other, offset)
    }

    /// Returns true if the number differs from `other` by no more than `percentage` of `other`.
    ///
    /// ```
    /// # use fluent_wrap::{wrap, num::Percentage};
    /// assert!(wrap(11.0).is_close_to_percentage(10.0, Percentage::new(10.0)));
    /// assert!(!wrap(12.0).is_close_to_percentage(10.0, Percentage::new(10.0)));
    /// ```
    pub fn is_close_to_percentage(
        &self,
        other: impl Into<Option<N>>,
        percentage: Percentage,
    ) -> bool {
        match (self.value, other.into()) {
            (Some(value), Some(other)) if value == other => true,
            (Some(value), Some(other)) => {
                let actual = spread(value, other);
                actual.is_finite() && actual <= percentage.of(other.to_f64())
            },
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns true if the number differs from `other` by more than `percentage` of `other`.
    /// An absence on one side only is never close.
    pub fn is_not_close_to_percentage(
        &self,
        other: impl Into<Option<N>>,
        percentage: Percentage,
    ) -> bool {
        match (self.value, other.into()) {
            (Some(value), Some(other)) if value == other => false,
            (Some(value), Some(other)) => {
                let tolerated = percentage.of(other.to_f64());
                tolerated.is_infinite() || spread(value, other) > tolerated
            },
            (None, None) => false,
            _ => true,
        }
    }

    /// Fills an absent number with zero.
    pub fn or_zero(&mut self) -> &mut Self {
        self.or_else_fill(|| N::ZERO)
    }

    pub fn int_value(&self) -> Option<i32> {
        self.value.map(N::to_i32)
    }

    pub fn long_value(&self) -> Option<i64> {
        self.value.map(N::to_i64)
    }

    pub fn float_value(&self) -> Option<f32> {
        self.value.map(N::to_f32)
    }

    pub fn double_value(&self) -> Option<f64> {
        self.value.map(N::to_f64)
    }

    pub fn as_int(&self) -> IntWrap {
        Wrap::from_option(self.int_value())
    }

    pub fn as_long(&self) -> LongWrap {
        Wrap::from_option(self.long_value())
    }

    pub fn as_float(&self) -> FloatWrap {
        Wrap::from_option(self.float_value())
    }

    pub fn as_double(&self) -> DoubleWrap {
        Wrap::from_option(self.double_value())
    }

    /// Converts to a [`DecimalWrap`], which is absent if the number is, or if it has no decimal
    /// representation.
    #[cfg(feature = "decimal")]
    pub fn as_decimal(&self) -> DecimalWrap {
        Wrap::from_option(self.value.and_then(N::to_decimal))
    }
}
