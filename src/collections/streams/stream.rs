use std::fmt::{self, Debug, Formatter};
use std::iter;

/// A lazily evaluated, single pass sequence of elements: a boxed iterator that can be held by a
/// [`StreamWrap`](crate::StreamWrap).
pub struct Stream<E> {
    inner: Box<dyn Iterator<Item = E>>,
}

impl<E> Stream<E> {
    pub fn new<I>(iter: I) -> Stream<E>
    where
        I: IntoIterator<Item = E>,
        I::IntoIter: 'static,
    {
        Stream {
            inner: Box::new(iter.into_iter()),
        }
    }

    pub fn empty() -> Stream<E>
    where
        E: 'static,
    {
        Stream::new(iter::empty())
    }
}

impl<E> Iterator for Stream<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> Debug for Stream<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}
