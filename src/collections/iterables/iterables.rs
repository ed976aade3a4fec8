use std::collections::HashSet;
use std::hash::Hash;

/// Flattens a possibly absent iterable into its elements, yielding nothing when absent.
pub fn elements<I: IntoIterator>(iterable: Option<I>) -> impl Iterator<Item = I::Item> {
    iterable.into_iter().flatten()
}

pub fn first<I: IntoIterator>(iterable: Option<I>) -> Option<I::Item> {
    elements(iterable).next()
}

pub fn last<I: IntoIterator>(iterable: Option<I>) -> Option<I::Item> {
    elements(iterable).last()
}

pub fn size<I: IntoIterator>(iterable: Option<I>) -> usize {
    elements(iterable).count()
}

pub fn is_empty<I: IntoIterator>(iterable: Option<I>) -> bool {
    first(iterable).is_none()
}

/// Returns true if any element of `iterable` equals `value`.
pub fn contains<I, V>(iterable: Option<I>, value: V) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
{
    elements(iterable).any(|element| element.eq(&value))
}

/// Returns true if every element of `sequence` occurs in `iterable`.
///
/// Two absences contain each other. Otherwise an absent or empty `sequence` is never contained.
pub fn contains_all<I, J>(iterable: Option<I>, sequence: Option<J>) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: PartialEq<J::Item>,
{
    let (iterable, sequence) = match (iterable, sequence) {
        (None, sequence) => return sequence.is_none(),
        (Some(_), None) => return false,
        (Some(iterable), Some(sequence)) => (iterable, sequence),
    };

    let haystack: Vec<I::Item> = iterable.into_iter().collect();
    let mut sequence = sequence.into_iter().peekable();
    sequence.peek().is_some()
        && sequence.all(|needle| haystack.iter().any(|element| *element == needle))
}

/// Returns true if `predicate` accepts any element. An absent predicate accepts nothing.
pub fn any_match<I, P>(iterable: Option<I>, predicate: Option<P>) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    match predicate {
        Some(mut predicate) => elements(iterable).any(|element| predicate(&element)),
        None => false,
    }
}

/// Returns true if `predicate` accepts every element. An absent predicate accepts nothing, so this
/// is false for it even on an empty iterable.
pub fn all_match<I, P>(iterable: Option<I>, predicate: Option<P>) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    match predicate {
        Some(mut predicate) => elements(iterable).all(|element| predicate(&element)),
        None => false,
    }
}

/// Returns true if `predicate` rejects every element. An absent predicate matches nothing, so
/// this is always true for it.
pub fn none_match<I, P>(iterable: Option<I>, predicate: Option<P>) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    match predicate {
        Some(mut predicate) => !elements(iterable).any(|element| predicate(&element)),
        None => true,
    }
}

pub fn to_vec<I: IntoIterator>(iterable: Option<I>) -> Vec<I::Item> {
    elements(iterable).collect()
}

pub fn to_set<I>(iterable: Option<I>) -> HashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    elements(iterable).collect()
}

/// Removes duplicates while keeping the first occurrence of each element in its place.
pub fn to_ordered_set<I>(iterable: Option<I>) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let items: Vec<I::Item> = elements(iterable).collect();
    let first_seen: Vec<bool> = {
        let mut seen = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };

    items
        .into_iter()
        .zip(first_seen)
        .filter_map(|(item, first)| first.then_some(item))
        .collect()
}

/// Pairs every element with its position.
pub fn indexed<I: IntoIterator>(iterable: Option<I>) -> impl Iterator<Item = (usize, I::Item)> {
    elements(iterable).enumerate()
}
