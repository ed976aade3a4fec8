#![cfg(test)]

use super::*;
use crate::error::InvalidOffset;
use crate::util::panic::assert_panics;
use crate::wrap::{Wrap, wrap};

#[test]
fn test_parity() {
    assert!(wrap(4).is_even());
    assert!(wrap(-3).is_odd());
    assert!(wrap(0_i64).is_even());
    assert!(wrap(i32::MIN).is_even());
    assert!(wrap(2.0).is_even());
    assert!(wrap(2.5_f32).is_odd());
    assert!(!IntWrap::none().is_even());
    assert!(!IntWrap::none().is_odd());
}

#[test]
fn test_sign() {
    assert!(wrap(1).is_positive());
    assert!(!wrap(0).is_positive());
    assert!(wrap(-0.5).is_negative());
    assert!(wrap(0).is_not_negative());
    assert!(wrap(0).is_not_positive());
    assert!(!wrap(-1).is_not_negative());

    let absent = LongWrap::none();
    assert!(!absent.is_positive());
    assert!(!absent.is_negative());
    assert!(absent.is_not_negative(), "Absence should count as not negative.");
    assert!(absent.is_not_positive(), "Absence should count as not positive.");
}

#[test]
fn test_zero_one() {
    assert!(wrap(0.0).is_zero());
    assert!(wrap(1_i64).is_one());
    assert!(wrap(2).is_not_zero());
    assert!(!DoubleWrap::none().is_zero());
    assert!(DoubleWrap::none().is_not_zero());
    assert!(!DoubleWrap::none().is_one());
}

#[test]
fn test_between() {
    let five = wrap(5);

    assert!(five.is_between(1, 5));
    assert!(five.is_between(5, 1));
    assert!(!five.is_strictly_between(1, 5));
    assert!(five.is_strictly_between(6, 4));
    assert!(!five.is_between(6, 9));
    assert!(!IntWrap::none().is_between(i32::MIN, i32::MAX));
}

#[test]
fn test_offsets() {
    assert_eq!(Offset::try_new(-1), Err(InvalidOffset::Negative));
    assert_eq!(Offset::try_new(f64::NAN), Err(InvalidOffset::Negative));
    assert_eq!(Offset::try_strict(0), Err(InvalidOffset::NotStrictlyPositive));
    assert!(Offset::try_new(0).is_ok());

    let offset = Offset::strict(2.5);
    assert!(offset.is_strict());
    assert_eq!(offset.value(), 2.5);
    assert!(offset.accepts(2.0));
    assert!(!offset.accepts(2.5));
    assert!(Offset::new(2.5).accepts(2.5));
}

#[test]
fn test_offset_panics() {
    assert_panics!(Offset::new(-3), "Negative offsets should panic.");
    assert_panics!(Offset::strict(0.0));
    assert_panics!(Percentage::new(-0.1));
}

#[test]
fn test_close_to() {
    let ten = wrap(10);

    assert!(ten.is_close_to(12, Offset::new(2)));
    assert!(ten.is_close_to(8, Offset::new(2)));
    assert!(!ten.is_close_to(13, Offset::new(2)));
    assert!(!ten.is_close_to(12, Offset::strict(2)));
    assert!(ten.is_close_to(10, Offset::new(0)), "Equal numbers are always close.");
    assert!(!ten.is_close_to(None, Offset::new(100)));
    assert!(!IntWrap::none().is_close_to(10, Offset::new(100)));

    assert!(ten.is_not_close_to(13, Offset::new(2)));
    assert!(!ten.is_not_close_to(11, Offset::new(2)));
    assert!(ten.is_not_close_to(None, Offset::new(2)));
}

#[test]
fn test_close_to_extremes() {
    let max = wrap(i32::MAX);

    assert!(!max.is_close_to(-1, Offset::new(0)));
    assert!(!max.is_close_to(i32::MIN, Offset::new(i32::MAX)));
    assert!(max.is_close_to(0, Offset::new(i32::MAX)));
    assert!(max.is_not_close_to(-1, Offset::new(1)));
    assert!(wrap(i64::MIN).is_close_to(i64::MIN + 1, Offset::strict(2)));

    assert!(!max.is_close_to_percentage(-1, Percentage::new(0.0)));
    assert!(max.is_not_close_to_percentage(-1, Percentage::new(0.0)));
    assert!(!wrap(i64::MAX).is_close_to_percentage(i64::MIN, Percentage::new(50.0)));
}

#[test]
fn test_close_to_percentage() {
    let hundred = wrap(100.0);

    assert!(hundred.is_close_to_percentage(110.0, Percentage::new(10.0)));
    assert!(!hundred.is_close_to_percentage(120.0, Percentage::new(10.0)));
    assert!(hundred.is_not_close_to_percentage(120.0, Percentage::new(10.0)));
    assert!(!hundred.is_not_close_to_percentage(100.0, Percentage::new(0.0)));
    assert!(!hundred.is_close_to_percentage(None, Percentage::new(50.0)));
    assert!(hundred.is_not_close_to_percentage(None, Percentage::new(50.0)));
    assert!(DoubleWrap::none().is_close_to_percentage(None, Percentage::new(1.0)));
    assert!(!wrap(f64::INFINITY).is_close_to_percentage(1.0, Percentage::new(1.0)));
}

#[test]
fn test_or_zero() {
    let mut absent = IntWrap::none();
    absent.or_zero();
    assert_eq!(absent.value(), Some(&0));

    let mut present = wrap(7);
    present.or_zero();
    assert_eq!(present.value(), Some(&7));
}

#[test]
fn test_conversions() {
    let long = wrap(5_000_000_000_i64);

    assert_eq!(long.int_value(), Some(5_000_000_000_i64 as i32));
    assert_eq!(long.double_value(), Some(5e9));
    assert_eq!(wrap(2.9).as_int().value(), Some(&2));
    assert_eq!(wrap(f64::MAX).long_value(), Some(i64::MAX));
    assert_eq!(wrap(3).as_float().value(), Some(&3.0));
    assert_eq!(wrap(1.5_f32).as_double().value(), Some(&1.5));
    assert_eq!(wrap(-1).as_long().value(), Some(&-1));
    assert!(FloatWrap::none().as_int().is_null());
    assert_eq!(FloatWrap::none().int_value(), None);
}

#[cfg(feature = "decimal")]
mod decimal {
    use rust_decimal::Decimal;

    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(wrap(12).as_decimal().value(), Some(&Decimal::from(12)));
        assert_eq!(wrap(0.25).as_decimal().value(), Some(&dec("0.25")));
        assert!(wrap(f32::NAN).as_decimal().is_null());
        assert!(IntWrap::none().as_decimal().is_null());
    }

    #[test]
    fn test_decimal_wrap() {
        let value = wrap(dec("-7.5"));

        assert!(value.is_negative());
        assert!(value.is_odd());
        assert!(wrap(dec("4.0")).is_even());
        assert!(wrap(dec("1.00")).is_one(), "Equality should ignore the scale.");
        assert_eq!(value.int_value(), Some(-7));
        assert_eq!(value.double_value(), Some(-7.5));
        assert!(value.is_close_to(dec("-7"), Offset::new(dec("0.5"))));
    }

    #[test]
    fn test_helpers() {
        assert!(decimals::is_number(Some("12.50")));
        assert!(decimals::is_number(Some("1e3")));
        assert!(!decimals::is_number(Some("twelve")));
        assert!(!decimals::is_number(None));

        assert_eq!(decimals::negate(Some(dec("2.5"))), Some(dec("-2.5")));
        assert_eq!(decimals::negate(None), None);
        assert_eq!(decimals::rem(Some(dec("-7")), Some(dec("3"))), Some(dec("-1")));
        assert_eq!(decimals::rem(Some(dec("7")), Some(Decimal::ZERO)), None);
        assert_eq!(decimals::rem(None, Some(dec("3"))), None);
        assert_eq!(decimals::to_decimal(Some(3_i64)), Some(dec("3")));
    }

    #[test]
    fn test_negate_rem() {
        let mut value: DecimalWrap = wrap(dec("10"));

        value.negate().rem(dec("4"));
        assert_eq!(value.value(), Some(&dec("-2")));
        value.rem(Decimal::ZERO);
        assert!(value.is_null());

        let mut absent = Wrap::<Decimal>::none();
        absent.negate();
        assert!(absent.is_null());
    }
}
