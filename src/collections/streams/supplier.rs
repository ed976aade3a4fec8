use std::fmt::{self, Debug, Formatter};
use std::iter;

use crate::collections::{Stream, StreamWrap};
use crate::wrap::Wrap;

/// A boxed producer of values.
pub struct Supplier<T> {
    inner: Box<dyn FnMut() -> T>,
}

impl<T> Supplier<T> {
    pub fn new<F: FnMut() -> T + 'static>(supplier: F) -> Supplier<T> {
        Supplier {
            inner: Box::new(supplier),
        }
    }

    pub fn get(&mut self) -> T {
        (self.inner)()
    }
}

impl<T> Debug for Supplier<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier").finish_non_exhaustive()
    }
}

pub type SupplierWrap<T> = Wrap<Supplier<T>>;

impl<T: 'static> Wrap<Supplier<T>> {
    /// Calls the supplier once. An absent supplier produces nothing.
    pub fn get_value(&mut self) -> Option<T> {
        self.value.as_mut().map(Supplier::get)
    }

    /// Turns the supplier into an endless stream of its values. An absent supplier gives an empty
    /// stream.
    pub fn infinite_stream(self) -> StreamWrap<T> {
        let stream = match self.value {
            Some(mut supplier) => Stream::new(iter::repeat_with(move || supplier.get())),
            None => Stream::empty(),
        };
        Wrap::from_option(Some(stream))
    }

    /// Turns the supplier into a stream of exactly `size` values.
    ///
    /// ```
    /// # use fluent_wrap::{wrap, collections::Supplier};
    /// let mut next = 0;
    /// let counter = Supplier::new(move || {
    ///     next += 1;
    ///     next
    /// });
    /// assert_eq!(wrap(counter).stream(3).to_vec(), [1, 2, 3]);
    /// ```
    pub fn stream(self, size: usize) -> StreamWrap<T> {
        self.infinite_stream().limit(size)
    }

    pub fn iterator(self, size: usize) -> Stream<T> {
        self.stream(size).iter()
    }
}
