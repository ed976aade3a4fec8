#![cfg(test)]

use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::error::UndefinedValue;

/// Behaves exactly like the default rule, so swapping it in globally can't disturb tests running
/// in parallel.
#[derive(Debug)]
struct MarkerRule;

impl NullRule for MarkerRule {
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue> {
        DefaultNullRule.char_value(value)
    }
}

#[derive(Debug)]
struct NullIsGreater;

impl NullRule for NullIsGreater {
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue> {
        Ok(value.unwrap_or('?'))
    }

    fn null_is_less(&self) -> bool {
        false
    }
}

#[test]
fn test_default_rule() {
    assert_eq!(DefaultNullRule.char_value(None), Ok('\0'));
    assert_eq!(DefaultNullRule.char_value(Some('a')), Ok('a'));
    assert!(DefaultNullRule.null_is_less());
}

#[test]
fn test_undefined_rule() {
    assert_eq!(UndefinedNullRule.char_value(None), Err(UndefinedValue));
    assert_eq!(UndefinedNullRule.char_value(Some('a')), Ok('a'));
}

#[test]
fn test_global_rule() {
    set_rule(MarkerRule);
    assert_eq!(format!("{:?}", rule()), "MarkerRule");

    reset_rule();
    assert_eq!(format!("{:?}", rule()), "DefaultNullRule");
}

#[test]
fn test_with_rule() {
    let inner = with_rule(NullIsGreater, || {
        let nested = with_rule(UndefinedNullRule, || rule().char_value(None));
        assert_eq!(nested, Err(UndefinedValue));
        (rule().char_value(None), rule().null_is_less())
    });

    assert_eq!(inner, (Ok('?'), false));
    assert!(rule().null_is_less(), "The override should end with the closure.");
}

#[test]
fn test_with_rule_restores_after_panic() {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        with_rule(UndefinedNullRule, || panic!("boom"))
    }));

    assert!(outcome.is_err());
    assert_eq!(rule().char_value(None), Ok('\0'));
}
