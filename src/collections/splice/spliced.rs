use std::ops::Range;

use tracing::trace;

/// The outcome of splicing a borrowed or possibly absent sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced<E> {
    /// The sequence after the splice, absent if the input was.
    pub result: Option<Vec<E>>,
    /// The elements taken out, in their original order.
    pub removed: Vec<E>,
}

/// Normalises a splice request against a sequence of `len` elements, producing the range that
/// will be removed.
///
/// A negative `start` counts back from the end and stops at `0`, a `start` past the end stops at
/// `len`. An omitted `delete_count` reaches the end, a negative one deletes nothing and an
/// oversized one stops at the end.
pub fn splice_range(len: usize, start: isize, delete_count: Option<isize>) -> Range<usize> {
    let from = if start < 0 {
        len.saturating_sub(start.unsigned_abs())
    } else {
        start.unsigned_abs().min(len)
    };

    let count = match delete_count {
        None => len - from,
        Some(count) if count < 0 => 0,
        Some(count) => count.unsigned_abs().min(len - from),
    };

    trace!(len, start, ?delete_count, from, count, "normalised splice");
    from..from + count
}

/// Splices `vec` in place with `Array.prototype.splice` semantics: removes the normalised range
/// (see [`splice_range`]), inserts `items` where it started and returns what was removed.
///
/// ```
/// # use fluent_wrap::collections::splice::splice;
/// let mut months = vec!["Jan", "March", "April", "June"];
/// let removed = splice(&mut months, 1, Some(0), ["Feb"]);
/// assert_eq!(months, ["Jan", "Feb", "March", "April", "June"]);
/// assert!(removed.is_empty());
///
/// let removed = splice(&mut months, -1, Some(1), ["May"]);
/// assert_eq!(months, ["Jan", "Feb", "March", "April", "May"]);
/// assert_eq!(removed, ["June"]);
/// ```
pub fn splice<E, I>(vec: &mut Vec<E>, start: isize, delete_count: Option<isize>, items: I) -> Vec<E>
where
    I: IntoIterator<Item = E>,
{
    let range = splice_range(vec.len(), start, delete_count);
    vec.splice(range, items).collect()
}

/// Splices a copy of `slice`, leaving the original untouched.
pub fn spliced_slice<E, I>(
    slice: &[E],
    start: isize,
    delete_count: Option<isize>,
    items: I,
) -> Spliced<E>
where
    E: Clone,
    I: IntoIterator<Item = E>,
{
    let mut result = slice.to_vec();
    let removed = splice(&mut result, start, delete_count, items);
    Spliced {
        result: Some(result),
        removed,
    }
}

/// Splices a copy of a possibly absent slice. An absent input stays absent and removes nothing,
/// whatever `items` holds.
pub fn splice_option<E, I>(
    slice: Option<&[E]>,
    start: isize,
    delete_count: Option<isize>,
    items: I,
) -> Spliced<E>
where
    E: Clone,
    I: IntoIterator<Item = E>,
{
    match slice {
        Some(slice) => spliced_slice(slice, start, delete_count, items),
        None => Spliced {
            result: None,
            removed: Vec::new(),
        },
    }
}

/// Copies a possibly absent slice into a new vector, which is empty for an absent input.
pub fn copy<E: Clone>(slice: Option<&[E]>) -> Vec<E> {
    slice.map(<[E]>::to_vec).unwrap_or_default()
}
