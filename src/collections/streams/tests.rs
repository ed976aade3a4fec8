#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::wrap::{Wrap, wrap};

fn words() -> StreamWrap<&'static str> {
    wrap(Stream::new(["pear", "fig", "apple", "kiwi"]))
}

#[test]
fn test_absent_stream_is_empty() {
    let absent = StreamWrap::<i32>::none();

    assert_eq!(absent.count(), 0);
    assert!(StreamWrap::<i32>::none().filter(|_| true).is_null());
    assert!(StreamWrap::<i32>::none().to_vec().is_empty());
    assert_eq!(StreamWrap::<i32>::none().to_list_wrap().value(), Some(&vec![]));
    assert_eq!(StreamWrap::<i32>::none().into_iter().next(), None);
}

#[test]
fn test_filter_remove() {
    assert_eq!(words().filter(|w| w.len() == 4).to_vec(), ["pear", "kiwi"]);
    assert_eq!(words().remove(|w| w.len() == 4).to_vec(), ["fig", "apple"]);
    assert_eq!(words().filter_when(false, |_| false).count(), 4);
    assert_eq!(words().filter_when(true, |_| false).count(), 0);
}

#[test]
fn test_map_limit() {
    let lengths = words().map(str::len).limit(2).to_vec();
    assert_eq!(lengths, [4, 3]);
}

#[test]
fn test_on_each() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);

    let kept = words()
        .on_each(move |word| sink.borrow_mut().push(word.len()))
        .filter(|word| word.starts_with('a'))
        .to_vec();

    assert_eq!(kept, ["apple"]);
    assert_eq!(*seen.borrow(), [4, 3, 5, 4]);
}

#[test]
fn test_sorting() {
    assert_eq!(words().sorted().to_vec(), ["apple", "fig", "kiwi", "pear"]);
    assert_eq!(words().sort_reversed().to_vec(), ["pear", "kiwi", "fig", "apple"]);
    assert_eq!(words().sorted_by_key(|w| w.len()).to_vec(), ["fig", "pear", "kiwi", "apple"]);
    assert_eq!(
        words().sort_reversed_by_key(|w| w.len()).to_vec(),
        ["apple", "pear", "kiwi", "fig"],
        "Reversed sorting by key should stay stable."
    );
    assert_eq!(
        words().sort_reversed_by(|a, b| a.cmp(b)).to_vec(),
        ["pear", "kiwi", "fig", "apple"]
    );
}

#[test]
fn test_remove_nulls() {
    let stream = wrap(Stream::new([Some(1), None, Some(3)]));
    assert_eq!(stream.remove_nulls().to_vec(), [1, 3]);
}

#[test]
fn test_into_iterator() {
    let total: usize = words().map(str::len).into_iter().sum();
    assert_eq!(total, 16);
}

#[test]
fn test_supplier() {
    let mut calls = 0;
    let mut supplier = wrap(Supplier::new(move || {
        calls += 1;
        calls * 10
    }));

    assert_eq!(supplier.get_value(), Some(10));
    assert_eq!(supplier.get_value(), Some(20));
    assert_eq!(supplier.stream(2).to_vec(), [30, 40]);
}

#[test]
fn test_infinite_stream() {
    let ones = wrap(Supplier::new(|| 1)).infinite_stream();
    assert_eq!(ones.limit(1000).count(), 1000);

    let mut iter = wrap(Supplier::new(|| 'x')).iterator(2);
    assert_eq!(iter.next(), Some('x'));
    assert_eq!(iter.next(), Some('x'));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_absent_supplier() {
    let mut absent: SupplierWrap<i32> = Wrap::none();

    assert_eq!(absent.get_value(), None);
    assert_eq!(absent.infinite_stream().count(), 0);
}
