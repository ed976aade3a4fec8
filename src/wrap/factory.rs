use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

use crate::collections::{Predicate, Stream, Supplier};
use crate::wrap::Wrap;

/// A marker for types that may be held by a [`Wrap`].
///
/// The factories only accept `Wrappable` values, and no wrapper implements this trait, so wrapping
/// a wrapper fails to compile:
///
/// ```compile_fail
/// # use fluent_wrap::{wrap, Wrap};
/// let inner = wrap(String::from("a"));
/// let outer = Wrap::of(inner);
/// ```
///
/// Implement it for your own types to wrap them, for example to use the JSON operations.
pub trait Wrappable {}

macro_rules! wrappable {
    ($($t:ty),* $(,)?) => {
        $(impl Wrappable for $t {})*
    };
}

wrappable!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    PathBuf,
);

impl<E> Wrappable for Vec<E> {}
impl<E> Wrappable for Box<[E]> {}
impl<E> Wrappable for VecDeque<E> {}
impl<E, S> Wrappable for HashSet<E, S> {}
impl<K, V, S> Wrappable for HashMap<K, V, S> {}
impl<E> Wrappable for BTreeSet<E> {}
impl<K, V> Wrappable for BTreeMap<K, V> {}
impl<T> Wrappable for Predicate<T> {}
impl<T> Wrappable for Supplier<T> {}
impl<E> Wrappable for Stream<E> {}

#[cfg(feature = "decimal")]
impl Wrappable for rust_decimal::Decimal {}

#[cfg(feature = "time")]
impl Wrappable for chrono::NaiveDate {}

/// Conversion into a [`Wrap`], used by [`wrap`].
///
/// Every [`Wrappable`] type converts into a wrapper around itself, and an [`Option`] of one
/// converts into a possibly absent wrapper. Borrowed strings, slices, arrays and paths are copied
/// into their owned counterparts.
pub trait IntoWrap {
    type Value;

    fn into_wrap(self) -> Wrap<Self::Value>;
}

impl<T: Wrappable> IntoWrap for T {
    type Value = T;

    fn into_wrap(self) -> Wrap<T> {
        Wrap::of(self)
    }
}

impl<T: Wrappable> IntoWrap for Option<T> {
    type Value = T;

    fn into_wrap(self) -> Wrap<T> {
        Wrap::from_option(self)
    }
}

impl IntoWrap for &str {
    type Value = String;

    fn into_wrap(self) -> Wrap<String> {
        Wrap::from_option(Some(self.to_owned()))
    }
}

impl IntoWrap for Option<&str> {
    type Value = String;

    fn into_wrap(self) -> Wrap<String> {
        Wrap::from_option(self.map(str::to_owned))
    }
}

impl<E: Clone> IntoWrap for &[E] {
    type Value = Box<[E]>;

    fn into_wrap(self) -> Wrap<Box<[E]>> {
        Wrap::from_option(Some(self.into()))
    }
}

impl<E: Clone> IntoWrap for Option<&[E]> {
    type Value = Box<[E]>;

    fn into_wrap(self) -> Wrap<Box<[E]>> {
        Wrap::from_option(self.map(Box::from))
    }
}

impl<E, const N: usize> IntoWrap for [E; N] {
    type Value = Box<[E]>;

    fn into_wrap(self) -> Wrap<Box<[E]>> {
        Wrap::from_option(Some(Box::new(self) as Box<[E]>))
    }
}

impl IntoWrap for &Path {
    type Value = PathBuf;

    fn into_wrap(self) -> Wrap<PathBuf> {
        Wrap::from_option(Some(self.to_path_buf()))
    }
}

/// Wraps a value, or an [`Option`] of one, in the matching wrapper.
///
/// ```
/// # use fluent_wrap::wrap;
/// assert!(wrap("").is_empty());
/// assert!(wrap(None::<&str>).is_null());
/// assert_eq!(wrap([3, 1, 2]).sort().to_string(), "[1, 2, 3]");
/// assert!(wrap(4).is_even());
/// ```
pub fn wrap<V: IntoWrap>(value: V) -> Wrap<V::Value> {
    value.into_wrap()
}
