#![cfg(test)]

use super::*;
use crate::wrap::wrap;

fn positive() -> Predicate<i32> {
    Predicate::new(|n: &i32| *n > 0)
}

#[test]
fn test_predicate() {
    let positive = positive();

    assert!(positive.test(&1));
    assert!(!positive.test(&-1));
    assert!(positive.negate().test(&-1));
    assert!(positive.clone().test(&2));
}

#[test]
fn test_not() {
    assert!(not(Some(&positive())).is_some_and(|p| p.test(&0)));
    assert!(not::<i32>(None).is_none());
}

#[test]
fn test_accepts_rejects() {
    let positive = positive();

    assert!(accepts(Some(&positive), &[1, 2]));
    assert!(!accepts(Some(&positive), &[1, -2]));
    assert!(accepts(Some(&positive), &[]));
    assert!(rejects(Some(&positive), &[-1, 0]));
    assert!(!rejects(Some(&positive), &[-1, 3]));
    assert!(rejects_any(Some(&positive), &[1, -3]));
    assert!(!rejects_any(Some(&positive), &[1, 3]));
    assert!(rejects_any(Some(&positive), &[]));
}

#[test]
fn test_absent_predicate() {
    assert!(!accepts::<i32>(None, &[1]));
    assert!(!accepts_all::<i32, _>(None, &[]));
    assert!(rejects::<i32>(None, &[1]));
    assert!(rejects_all::<i32, _>(None, &[1]));
    assert!(rejects_any::<i32, _>(None, &[1]));
}

#[test]
fn test_constants() {
    assert!(accept_all::<&str>().test(&"anything"));
    assert!(!reject_all::<&str>().test(&"anything"));
}

#[test]
fn test_wrap_fill() {
    let mut absent = PredicateWrap::<i32>::none();
    assert!(!absent.test(&1));

    absent.or_true();
    assert!(absent.test(&1));

    let mut absent = PredicateWrap::<i32>::none();
    absent.or_false();
    assert!(absent.is_not_null());
    assert!(!absent.test(&1));
}

#[test]
fn test_wrap_when_accepts() {
    let mut predicate = wrap(positive());

    predicate.when_accepts(&[1]);
    assert!(predicate.is_not_null());
    predicate.when_accepts(&[-1]);
    assert!(predicate.is_null(), "A failing check should drop the predicate.");
}

#[test]
fn test_wrap_filter() {
    let predicate = wrap(positive());
    let mut values = vec![-1, 2, 0, 3];

    assert_eq!(predicate.filtered(values.clone()), [2, 3]);
    assert_eq!(predicate.removed(values.clone()), [-1, 0]);
    assert_eq!(predicate.filter(&mut values), &[2, 3]);

    let absent = PredicateWrap::<i32>::none();
    assert_eq!(absent.filtered([1, -1]), [1, -1]);
    assert_eq!(absent.removed([1, -1]), [1, -1]);
}

#[test]
fn test_wrap_not() {
    let mut predicate = wrap(positive());

    predicate.not();
    assert!(predicate.accepts_all(&[-1, 0]));
    assert!(predicate.rejects_all(&[4]));
    assert!(predicate.rejects_any(&[0, 4]));
    assert!(PredicateWrap::<i32>::none().not().is_null());
}
