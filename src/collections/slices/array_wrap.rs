use std::any;
use std::cmp::Ordering;
use std::ops::Range;

use crate::collections::splice::{self, splice_option};
use crate::collections::{Enumerable, IndexedEnumerable, ListWrap, MutableEnumerable, slices};
use crate::error::IndexOutOfBounds;
use crate::wrap::Wrap;

/// A wrapped boxed slice, the fixed length counterpart of [`ListWrap`].
///
/// Operations that change the length reallocate the slice. The positional and mutating
/// operations it shares with [`ListWrap`] come from [`IndexedEnumerable`] and
/// [`MutableEnumerable`].
///
/// ```
/// # use fluent_wrap::{wrap, prelude::*};
/// let mut letters = wrap(["b", "c"]);
/// letters.unshift("a").push("d");
/// assert_eq!(letters.at(-1), Some(&"d"));
/// assert_eq!(letters.to_string(), "[a, b, c, d]");
/// ```
pub type ArrayWrap<E> = Wrap<Box<[E]>>;

impl<E> Wrap<Box<[E]>> {
    /// Returns the name of the element type.
    pub fn component_type(&self) -> &'static str {
        any::type_name::<E>()
    }

    /// Copies the elements into a new [`ListWrap`], absent if this array is.
    pub fn as_list(&self) -> ListWrap<E>
    where
        E: Clone,
    {
        Wrap::from_option(self.elements().map(<[E]>::to_vec))
    }

    /// Returns the last element without removing it.
    pub fn peek(&self) -> Option<&E> {
        slices::peek(self.elements())
    }

    /// Inserts `element` at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index` is past the end.
    pub fn insert(&mut self, index: usize, element: E) -> Result<&mut Self, IndexOutOfBounds> {
        slices::insert(self.value.as_mut(), index, element)?;
        Ok(self)
    }

    /// Removes the elements in `range`, which is clamped to the array.
    pub fn remove_range(&mut self, range: Range<usize>) -> &mut Self {
        slices::remove_range(self.value.as_mut(), range);
        self
    }

    /// Copies part of the array into a new wrapper. The bounds are clamped.
    pub fn sub_array(&self, start: usize, end: usize) -> ArrayWrap<E>
    where
        E: Clone,
    {
        Wrap::from_option(slices::sub_array(self.elements(), start, end))
    }

    /// Keeps the elements accepted by `predicate`.
    pub fn filter<P: FnMut(&E) -> bool>(&mut self, predicate: P) -> &mut Self {
        slices::filter(self.value.as_mut(), predicate);
        self
    }

    /// Appends `items`. An absent array becomes present if there is anything to append.
    pub fn concat<I: IntoIterator<Item = E>>(&mut self, items: I) -> &mut Self {
        self.value = slices::concat(self.value.take(), items);
        self
    }

    /// Swaps two elements. Out of range indices leave the array unchanged.
    pub fn swap(&mut self, index: usize, other: usize) -> &mut Self {
        slices::swap(self.elements_mut(), index, other);
        self
    }

    pub fn reverse(&mut self) -> &mut Self {
        slices::reverse(self.elements_mut());
        self
    }

    pub fn sort(&mut self) -> &mut Self
    where
        E: Ord,
    {
        slices::sort(self.elements_mut());
        self
    }

    pub fn sort_by<F: FnMut(&E, &E) -> Ordering>(&mut self, compare: F) -> &mut Self {
        slices::sort_by(self.elements_mut(), compare);
        self
    }

    pub fn shuffle(&mut self) -> &mut Self {
        slices::shuffle(self.elements_mut());
        self
    }

    /// Empties the array. An absent array stays absent.
    pub fn clear(&mut self) -> &mut Self {
        slices::clear(self.value.as_mut());
        self
    }

    /// Splices the array with `Array.prototype.splice` semantics (see
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

    /// Splices the array, moving the removed elements into `removed`.
    ///
    /// ```
    /// # use fluent_wrap::wrap;
    /// let mut removed = Vec::new();
    /// let mut fish = wrap(["angel", "clown", "drum", "sturgeon"]);
    /// fish.splice_into(&mut removed, 2, Some(1), ["trumpet"]);
    /// assert_eq!(fish.to_string(), "[angel, clown, trumpet, sturgeon]");
    /// assert_eq!(removed, ["drum"]);
    /// ```
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
        if let Some(array) = self.value.take() {
            let mut vec = array.into_vec();
            removed.extend(splice::splice(&mut vec, start, delete_count, items));
            self.value = Some(vec.into_boxed_slice());
        }
        self
    }

    /// Splices a copy of the array into a new wrapper, leaving this one untouched.
    pub fn spliced<I>(&self, start: isize, delete_count: Option<isize>, items: I) -> ArrayWrap<E>
    where
        E: Clone,
        I: IntoIterator<Item = E>,
    {
        let spliced = splice_option(self.elements(), start, delete_count, items);
        Wrap::from_option(spliced.result.map(Vec::into_boxed_slice))
    }

    /// Iterates over `(index, element)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &E)> {
        self.iter().enumerate()
    }

    pub fn for_each_entry<F: FnMut(usize, &E)>(&self, mut action: F) -> &Self {
        for (index, element) in self.entries() {
            action(index, element);
        }
        self
    }
}

impl<E> Enumerable<E> for Wrap<Box<[E]>> {
    fn elements(&self) -> Option<&[E]> {
        self.value.as_deref()
    }
}

impl<E> IndexedEnumerable<E> for Wrap<Box<[E]>> {}

impl<E> MutableEnumerable<E> for Wrap<Box<[E]>> {
    fn elements_mut(&mut self) -> Option<&mut [E]> {
        self.value.as_deref_mut()
    }

    fn push_all<I: IntoIterator<Item = E>>(&mut self, elements: I) -> &mut Self {
        slices::push(self.value.as_mut(), elements);
        self
    }

    fn pop(&mut self) -> Option<E> {
        slices::pop(self.value.as_mut())
    }

    fn shift(&mut self) -> Option<E> {
        slices::shift(self.value.as_mut())
    }

    fn unshift(&mut self, element: E) -> &mut Self {
        slices::unshift(self.value.as_mut(), element);
        self
    }

    fn remove(&mut self, index: usize) -> &mut Self {
        slices::remove(self.value.as_mut(), index);
        self
    }

    fn remove_if<P: FnMut(&E) -> bool>(&mut self, mut predicate: P) -> &mut Self {
        self.filter(|element| !predicate(element))
    }
}
