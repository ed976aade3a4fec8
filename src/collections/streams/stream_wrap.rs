use std::cmp::{Ordering, Reverse};

use crate::collections::{ListWrap, Stream};
use crate::wrap::Wrap;

/// A wrapped [`Stream`]. An absent stream behaves as an empty one.
///
/// Every operation consumes the wrapper and hands back a new one, as a stream can only be walked
/// once:
///
/// ```
/// # use fluent_wrap::{wrap, collections::Stream};
/// let upper = wrap(Stream::new(["a", "b", "C"]))
///     .filter(|s| s.chars().all(char::is_lowercase))
///     .map(|s| s.to_uppercase())
///     .to_vec();
/// assert_eq!(upper, ["A", "B"]);
/// ```
pub type StreamWrap<E> = Wrap<Stream<E>>;

impl<E: 'static> Wrap<Stream<E>> {
    fn stream_or_empty(self) -> Stream<E> {
        self.value.unwrap_or_else(Stream::empty)
    }

    fn with(self, apply: impl FnOnce(Stream<E>) -> Stream<E>) -> StreamWrap<E> {
        Wrap::from_option(self.value.map(apply))
    }

    /// Returns the underlying iterator, empty for an absent stream.
    pub fn iter(self) -> Stream<E> {
        self.stream_or_empty()
    }

    /// Keeps the elements accepted by `predicate`.
    pub fn filter<P>(self, predicate: P) -> StreamWrap<E>
    where
        P: FnMut(&E) -> bool + 'static,
    {
        self.with(|stream| Stream::new(stream.filter(predicate)))
    }

    /// Drops the elements accepted by `predicate`.
    pub fn remove<P>(self, mut predicate: P) -> StreamWrap<E>
    where
        P: FnMut(&E) -> bool + 'static,
    {
        self.filter(move |element| !predicate(element))
    }

    /// Filters only when `condition` holds, otherwise passes every element through.
    pub fn filter_when<P>(self, condition: bool, predicate: P) -> StreamWrap<E>
    where
        P: FnMut(&E) -> bool + 'static,
    {
        if condition {
            self.filter(predicate)
        } else {
            self
        }
    }

    pub fn map<R, F>(self, mapper: F) -> StreamWrap<R>
    where
        R: 'static,
        F: FnMut(E) -> R + 'static,
    {
        Wrap::from_option(self.value.map(|stream| Stream::new(stream.map(mapper))))
    }

    /// Counts the remaining elements, exhausting the stream.
    pub fn count(self) -> usize {
        self.stream_or_empty().count()
    }

    /// Runs `action` on each element as it passes through.
    pub fn on_each<F>(self, action: F) -> StreamWrap<E>
    where
        F: FnMut(&E) + 'static,
    {
        self.with(|stream| Stream::new(stream.inspect(action)))
    }

    pub fn sorted(self) -> StreamWrap<E>
    where
        E: Ord,
    {
        self.sorted_by(Ord::cmp)
    }

    /// Sorts the elements with `compare`. Sorting is stable and has to buffer the whole stream.
    pub fn sorted_by<F>(self, mut compare: F) -> StreamWrap<E>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.with(|stream| {
            let mut buffer: Vec<E> = stream.collect();
            buffer.sort_by(&mut compare);
            Stream::new(buffer)
        })
    }

    pub fn sorted_by_key<K, F>(self, mut key: F) -> StreamWrap<E>
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.sorted_by(|a, b| key(a).cmp(&key(b)))
    }

    pub fn sort_reversed(self) -> StreamWrap<E>
    where
        E: Ord,
    {
        self.sorted_by(|a, b| b.cmp(a))
    }

    pub fn sort_reversed_by<F>(self, mut compare: F) -> StreamWrap<E>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        self.sorted_by(move |a, b| compare(b, a))
    }

    pub fn sort_reversed_by_key<K, F>(self, mut key: F) -> StreamWrap<E>
    where
        K: Ord,
        F: FnMut(&E) -> K,
    {
        self.sorted_by(|a, b| Reverse(key(a)).cmp(&Reverse(key(b))))
    }

    /// Truncates the stream to at most `limit` elements.
    pub fn limit(self, limit: usize) -> StreamWrap<E> {
        self.with(|stream| Stream::new(stream.take(limit)))
    }

    pub fn to_vec(self) -> Vec<E> {
        self.stream_or_empty().collect()
    }

    /// Collects the stream into a list. An absent stream produces an empty list, not an absent
    /// one.
    pub fn to_list_wrap(self) -> ListWrap<E> {
        Wrap::from_option(Some(self.to_vec()))
    }
}

impl<E: 'static> Wrap<Stream<Option<E>>> {
    /// Drops the absent elements of the stream.
    pub fn remove_nulls(self) -> StreamWrap<E> {
        Wrap::from_option(self.value.map(|stream| Stream::new(stream.flatten())))
    }
}

impl<E: 'static> IntoIterator for Wrap<Stream<E>> {
    type Item = E;
    type IntoIter = Stream<E>;

    fn into_iter(self) -> Stream<E> {
        self.stream_or_empty()
    }
}
