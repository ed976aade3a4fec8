use std::cmp::Ordering;

use crate::collections::splice::{self, Spliced, splice_option};
use crate::collections::{Enumerable, IndexedEnumerable, MutableEnumerable, lists};
use crate::error::IndexOutOfBounds;
use crate::wrap::Wrap;

/// A wrapped [`Vec`].
///
/// ```
/// # use fluent_wrap::{wrap, prelude::*};
/// let mut queue = wrap(vec![1, 2, 3, 4]);
/// queue.remove_while(|n| *n < 3).push(5);
/// assert_eq!(queue.shift(), Some(3));
/// assert_eq!(queue.to_vec(), [4, 5]);
/// ```
pub type ListWrap<E> = Wrap<Vec<E>>;

impl<E> Wrap<Vec<E>> {
    /// Copies part of the list into a new wrapper. The bounds are clamped.
    pub fn sub_list(&self, start: usize, end: usize) -> ListWrap<E>
    where
        E: Clone,
    {
        Wrap::from_option(lists::sub_list(self.elements(), start, end))
    }

    /// Returns true if `index` points at an element.
    pub fn is_index_valid(&self, index: usize) -> bool {
        lists::is_index_valid(self.elements(), index)
    }

    /// Copies `length` elements starting at `source_index` into this list at `index`.
    ///
    /// # Errors
    /// See [`lists::list_copy`].
    pub fn copy_from(
        &mut self,
        source: &[E],
        source_index: usize,
        index: usize,
        length: usize,
    ) -> Result<&mut Self, IndexOutOfBounds>
    where
        E: Clone,
    {
        lists::list_copy(Some(source), source_index, self.value.as_mut(), index, length)?;
        Ok(self)
    }

    pub fn clear(&mut self) -> &mut Self {
        if let Some(list) = &mut self.value {
            list.clear();
        }
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        if let Some(list) = &mut self.value {
            list.reverse();
        }
        self
    }

    pub fn sort(&mut self) -> &mut Self
    where
        E: Ord,
    {
        if let Some(list) = &mut self.value {
            list.sort();
        }
        self
    }

    pub fn sort_by<F: FnMut(&E, &E) -> Ordering>(&mut self, compare: F) -> &mut Self {
        if let Some(list) = &mut self.value {
            list.sort_by(compare);
        }
        self
    }

    /// Splices the list in place with `Array.prototype.splice` semantics (see
    /// [`splice_range`](splice::splice_range)), discarding the removed elements.
    pub fn splice<I>(&mut self, start: isize, delete_count: Option<isize>, items: I) -> &mut Self
    where
        I: IntoIterator<Item = E>,
    {
        self.splice_into(&mut Vec::new(), start, delete_count, items)
    }

    /// Removes everything from `start` onwards.
    pub fn splice_from(&mut self, start: isize) -> &mut Self {
        self.splice(start, None, [])
    }

    /// Removes everything from `start` onwards, moving the removed elements into `removed`.
    pub fn splice_from_into<C: Extend<E>>(&mut self, removed: &mut C, start: isize) -> &mut Self {
        self.splice_into(removed, start, None, [])
    }

    /// Splices the list in place, moving the removed elements into `removed`.
    pub fn splice_into<C, I>(
        &mut self,
        removed: &mut C,
        start: isize,
        delete_count: Option<isize>,
        items: I,
    ) -> &mut Self
    where
        C: Extend<E>,
        I: IntoIterator<Item = E>,
    {
        if let Some(list) = &mut self.value {
            removed.extend(splice::splice(list, start, delete_count, items));
        }
        self
    }

    /// Splices a copy of the list, leaving this one untouched.
    pub fn spliced<I>(&self, start: isize, delete_count: Option<isize>, items: I) -> Spliced<E>
    where
        E: Clone,
        I: IntoIterator<Item = E>,
    {
        splice_option(self.elements(), start, delete_count, items)
    }
}

impl<E> Enumerable<E> for Wrap<Vec<E>> {
    fn elements(&self) -> Option<&[E]> {
        self.value.as_deref()
    }
}

impl<E> IndexedEnumerable<E> for Wrap<Vec<E>> {}

impl<E> MutableEnumerable<E> for Wrap<Vec<E>> {
    fn elements_mut(&mut self) -> Option<&mut [E]> {
        self.value.as_deref_mut()
    }

    /// Appends `elements`. An absent list becomes a new list holding them.
    fn push_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> &mut Self {
        self.value = Some(lists::add_all(self.value.take(), elements));
        self
    }

    fn pop(&mut self) -> Option<E> {
        lists::pop(self.value.as_mut())
    }

    fn shift(&mut self) -> Option<E> {
        lists::shift(self.value.as_mut())
    }

    /// Inserts `element` at the front. An absent list becomes a new list holding it.
    fn unshift(&mut self, element: E) -> &mut Self {
        self.value = Some(lists::unshift(self.value.take(), element));
        self
    }

    fn remove(&mut self, index: usize) -> &mut Self {
        lists::remove(self.value.as_mut(), index);
        self
    }

    fn remove_if<P: FnMut(&E) -> bool>(&mut self, mut predicate: P) -> &mut Self {
        if let Some(list) = &mut self.value {
            list.retain(|element| !predicate(element));
        }
        self
    }

    fn replace(&mut self, index: usize, element: E) -> Option<E> {
        let in_range = self.is_index_valid(index);
        let previous = lists::set(self.value.as_mut(), index, element);
        in_range.then_some(previous)
    }
}
