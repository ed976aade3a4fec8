use std::collections::HashSet;
use std::hash::Hash;
use std::slice;

use crate::collections::{Stream, StreamWrap, slices};
use crate::wrap::Wrap;

/// A wrapper over a contiguous, possibly absent sequence of elements.
///
/// Implementors only provide [`elements`](Enumerable::elements). Every query treats an absent
/// sequence as an empty one, except [`is_null_or_empty`](Enumerable::is_null_or_empty) which
/// exists to tell the two apart from the outside.
pub trait Enumerable<E> {
    fn elements(&self) -> Option<&[E]>;

    fn size(&self) -> usize {
        self.elements().map_or(0, <[E]>::len)
    }

    fn has_size(&self, size: usize) -> bool {
        self.size() == size
    }

    fn is_empty(&self) -> bool {
        self.has_size(0)
    }

    fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    fn is_null_or_empty(&self) -> bool {
        self.elements().is_none_or(<[E]>::is_empty)
    }

    fn is_singleton(&self) -> bool {
        self.has_size(1)
    }

    fn first(&self) -> Option<&E> {
        self.elements()?.first()
    }

    fn last(&self) -> Option<&E> {
        self.elements()?.last()
    }

    fn iter(&self) -> slice::Iter<'_, E> {
        self.elements().unwrap_or_default().iter()
    }

    /// Copies the elements into a new [`StreamWrap`], which is empty for an absent sequence.
    fn stream(&self) -> StreamWrap<E>
    where
        E: Clone + 'static,
    {
        Wrap::from_option(Some(Stream::new(self.to_vec())))
    }

    fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.elements().map(<[E]>::to_vec).unwrap_or_default()
    }

    fn to_set(&self) -> HashSet<E>
    where
        E: Clone + Eq + Hash,
    {
        self.iter().cloned().collect()
    }

    fn count_matching<P: FnMut(&E) -> bool>(&self, mut predicate: P) -> usize {
        self.iter().filter(|element| predicate(element)).count()
    }
}

/// An [`Enumerable`] with positional access.
///
/// Positions past the end (or before the start, for [`at`](IndexedEnumerable::at)) never fail:
/// they simply find nothing.
pub trait IndexedEnumerable<E>: Enumerable<E> {
    fn get(&self, index: usize) -> Option<&E> {
        slices::get(self.elements(), index)
    }

    /// Returns the element at `index`, counting back from the end for negative indices.
    fn at(&self, index: isize) -> Option<&E> {
        slices::at(self.elements(), index)
    }

    fn index_of(&self, element: &E) -> Option<usize>
    where
        E: PartialEq,
    {
        slices::index_of(self.elements(), element)
    }

    fn contains_at(&self, element: &E, index: usize) -> bool
    where
        E: PartialEq,
    {
        slices::contains_at(self.elements(), element, index)
    }

    fn does_not_contain_at(&self, element: &E, index: usize) -> bool
    where
        E: PartialEq,
    {
        !self.contains_at(element, index)
    }

    /// Returns true if every element of `elements` occurs somewhere in this sequence. An empty
    /// `elements` is never contained, nor is anything contained in an absent sequence.
    fn contains_all<'a, I>(&self, elements: I) -> bool
    where
        E: PartialEq + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        slices::contains_all(self.elements(), elements)
    }
}

/// An [`IndexedEnumerable`] that can be changed in place.
///
/// Growing and shrinking operations are left to the implementor, as a boxed slice has to be
/// reallocated while a vector doesn't. Every mutation is a no-op on an absent sequence, and every
/// method taking an index ignores positions outside the sequence.
pub trait MutableEnumerable<E>: IndexedEnumerable<E> {
    fn elements_mut(&mut self) -> Option<&mut [E]>;

    /// Appends every element of `elements`.
    fn push_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> &mut Self;

    /// Removes and returns the last element.
    fn pop(&mut self) -> Option<E>;

    /// Removes and returns the first element.
    fn shift(&mut self) -> Option<E>;

    /// Inserts `element` at the front.
    fn unshift(&mut self, element: E) -> &mut Self;

    /// Removes the element at `index`.
    fn remove(&mut self, index: usize) -> &mut Self;

    /// Removes every element accepted by `predicate`, visiting them in order.
    fn remove_if<P: FnMut(&E) -> bool>(&mut self, predicate: P) -> &mut Self;

    fn push(&mut self, element: E) -> &mut Self {
        self.push_all([element])
    }

    fn fill(&mut self, element: E) -> &mut Self
    where
        E: Clone,
    {
        slices::fill(self.elements_mut(), element);
        self
    }

    /// Replaces the element at `index`, returning the previous one.
    fn replace(&mut self, index: usize, element: E) -> Option<E> {
        slices::replace(self.elements_mut(), index, element)
    }

    fn set(&mut self, index: usize, element: E) -> &mut Self {
        self.replace(index, element);
        self
    }

    /// Removes the first occurrence of `element`.
    fn remove_element(&mut self, element: &E) -> &mut Self
    where
        E: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove(index),
            None => self,
        }
    }

    /// Removes the leading run of elements accepted by `predicate`.
    fn remove_while<P: FnMut(&E) -> bool>(&mut self, mut predicate: P) -> &mut Self {
        let mut leading = true;
        self.remove_if(|element| {
            leading = leading && predicate(element);
            leading
        })
    }
}
