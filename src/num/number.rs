use std::fmt::Debug;

#[cfg(feature = "decimal")]
use rust_decimal::Decimal;
#[cfg(feature = "decimal")]
use rust_decimal::prelude::ToPrimitive;

use crate::util::sealed::Sealed;

/// A numeric type that can be held by a number wrapper.
///
/// Implemented for [`i32`], [`i64`], [`f32`], [`f64`] and, with the `decimal` feature,
/// [`Decimal`]. The conversions follow `as` casts: integers wrap, floats saturate and decimals
/// drop their fraction.
pub trait Number: Sealed + Copy + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// The absolute difference between two numbers, or [`None`] if it doesn't fit in `Self`.
    fn distance(self, other: Self) -> Option<Self>;

    fn magnitude(self) -> Self;

    fn remainder(self, divisor: Self) -> Self;

    fn to_i32(self) -> i32;

    fn to_i64(self) -> i64;

    fn to_f32(self) -> f32;

    fn to_f64(self) -> f64;

    /// Converts to a [`Decimal`], which fails for non finite floats and floats out of its range.
    #[cfg(feature = "decimal")]
    fn to_decimal(self) -> Option<Decimal>;
}

macro_rules! integer {
    ($($t:ty),*) => {
        $(
            impl Sealed for $t {}

            impl Number for $t {
                const ZERO: $t = 0;
                const ONE: $t = 1;
                const TWO: $t = 2;

                fn distance(self, other: $t) -> Option<$t> {
                    <$t>::try_from(self.abs_diff(other)).ok()
                }

                fn magnitude(self) -> $t {
                    self.wrapping_abs()
                }

                fn remainder(self, divisor: $t) -> $t {
                    self.checked_rem(divisor).unwrap_or(0)
                }

                fn to_i32(self) -> i32 {
                    self as i32
                }

                fn to_i64(self) -> i64 {
                    self as i64
                }

                fn to_f32(self) -> f32 {
                    self as f32
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[cfg(feature = "decimal")]
                fn to_decimal(self) -> Option<Decimal> {
                    Some(Decimal::from(self))
                }
            }
        )*
    };
}

macro_rules! float {
    ($($t:ty),*) => {
        $(
            impl Sealed for $t {}

            impl Number for $t {
                const ZERO: $t = 0.0;
                const ONE: $t = 1.0;
                const TWO: $t = 2.0;

                fn distance(self, other: $t) -> Option<$t> {
                    Some((self - other).abs())
                }

                fn magnitude(self) -> $t {
                    self.abs()
                }

                fn remainder(self, divisor: $t) -> $t {
                    self % divisor
                }

                fn to_i32(self) -> i32 {
                    self as i32
                }

                fn to_i64(self) -> i64 {
                    self as i64
                }

                fn to_f32(self) -> f32 {
                    self as f32
                }

                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[cfg(feature = "decimal")]
                fn to_decimal(self) -> Option<Decimal> {
                    // Parsing the shortest representation keeps 0.1 from turning into
                    // 0.1000000000000000055511151231.
                    self.to_string().parse().ok()
                }
            }
        )*
    };
}

integer!(i32, i64);
float!(f32, f64);

#[cfg(feature = "decimal")]
impl Sealed for Decimal {}

#[cfg(feature = "decimal")]
impl Number for Decimal {
    const ZERO: Decimal = Decimal::ZERO;
    const ONE: Decimal = Decimal::ONE;
    const TWO: Decimal = Decimal::TWO;

    fn distance(self, other: Decimal) -> Option<Decimal> {
        self.checked_sub(other).map(|difference| difference.abs())
    }

    fn magnitude(self) -> Decimal {
        self.abs()
    }

    fn remainder(self, divisor: Decimal) -> Decimal {
        self.checked_rem(divisor).unwrap_or(Decimal::ZERO)
    }

    fn to_i32(self) -> i32 {
        self.to_i64() as i32
    }

    fn to_i64(self) -> i64 {
        self.trunc().to_i128().unwrap_or_default() as i64
    }

    fn to_f32(self) -> f32 {
        ToPrimitive::to_f32(&self).unwrap_or_default()
    }

    fn to_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or_default()
    }

    fn to_decimal(self) -> Option<Decimal> {
        Some(self)
    }
}
