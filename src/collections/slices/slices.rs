use std::cmp::Ordering;
use std::mem;
use std::ops::Range;

use rand::seq::SliceRandom;

use crate::error::IndexOutOfBounds;
use crate::wrap::{Represent, Represented};

fn rebuild<E, R>(array: &mut Box<[E]>, edit: impl FnOnce(&mut Vec<E>) -> R) -> R {
    let mut vec = mem::take(array).into_vec();
    let result = edit(&mut vec);
    *array = vec.into_boxed_slice();
    result
}

/// Resolves a possibly negative index against a sequence of `len` elements. Negative indices
/// count back from the end, so `-1` is the last element.
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };

    (resolved < len).then_some(resolved)
}

pub fn get<E>(array: Option<&[E]>, index: usize) -> Option<&E> {
    array?.get(index)
}

/// Returns the element at `index`, counting back from the end for negative indices.
///
/// ```
/// # use fluent_wrap::collections::slices;
/// let fruit = ["Apple", "Banana"];
/// assert_eq!(slices::at(Some(&fruit[..]), -1), Some(&"Banana"));
/// assert_eq!(slices::at(Some(&fruit[..]), -3), None);
/// ```
pub fn at<E>(array: Option<&[E]>, index: isize) -> Option<&E> {
    let array = array?;
    array.get(resolve_index(index, array.len())?)
}

/// Replaces the element at `index`, returning the previous one. Nothing is replaced outside of
/// the slice.
pub fn replace<E>(array: Option<&mut [E]>, index: usize, element: E) -> Option<E> {
    array?.get_mut(index).map(|slot| mem::replace(slot, element))
}

pub fn push<E, I: IntoIterator<Item = E>>(array: Option<&mut Box<[E]>>, items: I) {
    if let Some(array) = array {
        rebuild(array, |vec| vec.extend(items));
    }
}

/// Returns the last element without removing it.
pub fn peek<E>(array: Option<&[E]>) -> Option<&E> {
    array?.last()
}

pub fn pop<E>(array: Option<&mut Box<[E]>>) -> Option<E> {
    match array {
        Some(array) if !array.is_empty() => rebuild(array, Vec::pop),
        _ => None,
    }
}

pub fn shift<E>(array: Option<&mut Box<[E]>>) -> Option<E> {
    remove(array, 0)
}

/// Inserts `element` at the front.
pub fn unshift<E>(array: Option<&mut Box<[E]>>, element: E) {
    if let Some(array) = array {
        rebuild(array, |vec| vec.insert(0, element));
    }
}

/// Inserts `element` at `index`, shifting everything after it. `index` may equal the length, which
/// appends.
///
/// # Errors
/// Returns [`IndexOutOfBounds`] if `index` is past the end.
pub fn insert<E>(
    array: Option<&mut Box<[E]>>,
    index: usize,
    element: E,
) -> Result<(), IndexOutOfBounds> {
    let Some(array) = array else {
        return Ok(());
    };

    if index > array.len() {
        return Err(IndexOutOfBounds {
            index,
            len: array.len(),
        });
    }

    rebuild(array, |vec| vec.insert(index, element));
    Ok(())
}

/// Removes and returns the element at `index`, if there is one.
pub fn remove<E>(array: Option<&mut Box<[E]>>, index: usize) -> Option<E> {
    match array {
        Some(array) if index < array.len() => Some(rebuild(array, |vec| vec.remove(index))),
        _ => None,
    }
}

/// Removes the elements in `range` and returns them. The end of the range is clamped to the
/// length, and an empty or out of bounds range removes nothing.
pub fn remove_range<E>(array: Option<&mut Box<[E]>>, range: Range<usize>) -> Vec<E> {
    match array {
        Some(array) => {
            let end = range.end.min(array.len());
            if range.start >= end {
                return Vec::new();
            }
            rebuild(array, |vec| vec.drain(range.start..end).collect())
        },
        None => Vec::new(),
    }
}

/// Copies the elements between `start` (inclusive) and `end` (exclusive) into a new boxed slice.
/// The bounds are clamped, so an inverted range gives an empty result.
pub fn sub_array<E: Clone>(array: Option<&[E]>, start: usize, end: usize) -> Option<Box<[E]>> {
    let array = array?;
    let end = end.min(array.len());
    let start = start.min(end);
    Some(array[start..end].into())
}

/// Keeps the elements accepted by `predicate`.
pub fn filter<E, P: FnMut(&E) -> bool>(array: Option<&mut Box<[E]>>, predicate: P) {
    if let Some(array) = array {
        rebuild(array, |vec| vec.retain(predicate));
    }
}

/// Appends `items` to `array`. When there is something to append, an absent array is treated as
/// an empty one.
pub fn concat<E, I>(array: Option<Box<[E]>>, items: I) -> Option<Box<[E]>>
where
    I: IntoIterator<Item = E>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        return array;
    }

    let mut array = array.unwrap_or_default();
    rebuild(&mut array, |vec| vec.extend(items));
    Some(array)
}

pub fn index_of<E: PartialEq>(array: Option<&[E]>, element: &E) -> Option<usize> {
    array?.iter().position(|candidate| candidate == element)
}

/// Returns true if `element` sits at `index`.
pub fn contains_at<E: PartialEq>(array: Option<&[E]>, element: &E, index: usize) -> bool {
    get(array, index).is_some_and(|candidate| candidate == element)
}

/// Returns true if every element of `elements` occurs in `array`. An empty `elements` is never
/// contained.
pub fn contains_all<'a, E, I>(array: Option<&[E]>, elements: I) -> bool
where
    E: PartialEq + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let Some(array) = array else {
        return false;
    };

    let mut elements = elements.into_iter().peekable();
    elements.peek().is_some() && elements.all(|element| array.contains(element))
}

/// Swaps two elements. Does nothing if either index is outside the slice.
pub fn swap<E>(array: Option<&mut [E]>, index: usize, other: usize) {
    match array {
        Some(array) if index < array.len() && other < array.len() => array.swap(index, other),
        _ => (),
    }
}

pub fn reverse<E>(array: Option<&mut [E]>) {
    if let Some(array) = array {
        array.reverse();
    }
}

pub fn sort<E: Ord>(array: Option<&mut [E]>) {
    if let Some(array) = array {
        array.sort();
    }
}

pub fn sort_by<E, F: FnMut(&E, &E) -> Ordering>(array: Option<&mut [E]>, compare: F) {
    if let Some(array) = array {
        array.sort_by(compare);
    }
}

/// Shuffles the elements in place with the thread-local RNG.
pub fn shuffle<E>(array: Option<&mut [E]>) {
    match array {
        Some(array) if array.len() > 1 => array.shuffle(&mut rand::thread_rng()),
        _ => (),
    }
}

pub fn fill<E: Clone>(array: Option<&mut [E]>, element: E) {
    if let Some(array) = array {
        array.fill(element);
    }
}

/// Empties a boxed slice.
pub fn clear<E>(array: Option<&mut Box<[E]>>) {
    if let Some(array) = array {
        *array = Box::default();
    }
}

/// Represents the slice as `[a, b, c]`, or `null` when absent.
pub fn to_string<E: Represent>(array: Option<&[E]>) -> String {
    Represented(array).to_string()
}
