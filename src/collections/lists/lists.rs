use std::mem;

use crate::collections::slices;
use crate::error::IndexOutOfBounds;

pub fn first<E>(list: Option<&[E]>) -> Option<&E> {
    list?.first()
}

pub fn last<E>(list: Option<&[E]>) -> Option<&E> {
    list?.last()
}

pub fn get<E>(list: Option<&[E]>, index: usize) -> Option<&E> {
    slices::get(list, index)
}

/// Returns the element at `index`, counting back from the end for negative indices.
pub fn at<E>(list: Option<&[E]>, index: isize) -> Option<&E> {
    slices::at(list, index)
}

/// Replaces the element at `index`, returning the previous one.
///
/// If `index` is outside the list, nothing changes and `element` is handed back instead.
pub fn set<E>(list: Option<&mut Vec<E>>, index: usize, element: E) -> E {
    match list.and_then(|list| list.get_mut(index)) {
        Some(slot) => mem::replace(slot, element),
        None => element,
    }
}

/// Removes and returns the element at `index`, if there is one.
pub fn remove<E>(list: Option<&mut Vec<E>>, index: usize) -> Option<E> {
    let list = list?;
    (index < list.len()).then(|| list.remove(index))
}

/// Removes and returns the last element.
pub fn pop<E>(list: Option<&mut Vec<E>>) -> Option<E> {
    list?.pop()
}

/// Removes and returns the first element.
pub fn shift<E>(list: Option<&mut Vec<E>>) -> Option<E> {
    remove(list, 0)
}

/// Inserts `element` at the front of `list`, starting a new list if there is none.
pub fn unshift<E>(list: Option<Vec<E>>, element: E) -> Vec<E> {
    match list {
        Some(mut list) => {
            list.insert(0, element);
            list
        },
        None => vec![element],
    }
}

/// Appends `items` to `list`, starting a new list if there is none.
pub fn add_all<E, I: IntoIterator<Item = E>>(list: Option<Vec<E>>, items: I) -> Vec<E> {
    let mut list = list.unwrap_or_default();
    list.extend(items);
    list
}

pub fn fill<E: Clone>(list: Option<&mut [E]>, element: E) {
    slices::fill(list, element);
}

/// Copies the elements between `start` (inclusive) and `end` (exclusive) into a new list. The
/// bounds are clamped, so an inverted range gives an empty list.
pub fn sub_list<E: Clone>(list: Option<&[E]>, start: usize, end: usize) -> Option<Vec<E>> {
    slices::sub_array(list, start, end).map(Vec::from)
}

pub fn is_index_valid<E>(list: Option<&[E]>, index: usize) -> bool {
    list.is_some_and(|list| index < list.len())
}

pub fn index_of<E: PartialEq>(list: Option<&[E]>, element: &E) -> Option<usize> {
    slices::index_of(list, element)
}

pub fn contains_at<E: PartialEq>(list: Option<&[E]>, element: &E, index: usize) -> bool {
    slices::contains_at(list, element, index)
}

/// The negation of [`contains_at`]: true for an absent list or an index outside of it.
pub fn does_not_contain_at<E: PartialEq>(list: Option<&[E]>, element: &E, index: usize) -> bool {
    !contains_at(list, element, index)
}

/// Inserts a copy of `length` elements of `source`, starting at `source_index`, into
/// `destination` at `destination_index`. Nothing happens if either list is absent.
///
/// # Errors
/// Returns [`IndexOutOfBounds`] if the copied range runs past the end of `source`, or if
/// `destination_index` is past the end of `destination`.
pub fn list_copy<E: Clone>(
    source: Option<&[E]>,
    source_index: usize,
    destination: Option<&mut Vec<E>>,
    destination_index: usize,
    length: usize,
) -> Result<(), IndexOutOfBounds> {
    let (Some(source), Some(destination)) = (source, destination) else {
        return Ok(());
    };

    let end = source_index.saturating_add(length);
    if end > source.len() {
        return Err(IndexOutOfBounds {
            index: end,
            len: source.len(),
        });
    }
    if destination_index > destination.len() {
        return Err(IndexOutOfBounds {
            index: destination_index,
            len: destination.len(),
        });
    }

    let tail = destination.split_off(destination_index);
    destination.extend_from_slice(&source[source_index..end]);
    destination.extend(tail);
    Ok(())
}
