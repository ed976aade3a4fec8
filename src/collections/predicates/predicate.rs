use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// A shareable boolean test over borrowed values.
pub struct Predicate<T> {
    test: Rc<dyn Fn(&T) -> bool>,
}

impl<T> Predicate<T> {
    pub fn new<F: Fn(&T) -> bool + 'static>(test: F) -> Predicate<T> {
        Predicate {
            test: Rc::new(test),
        }
    }

    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Returns a predicate accepting exactly what this one rejects.
    pub fn negate(&self) -> Predicate<T>
    where
        T: 'static,
    {
        let test = Rc::clone(&self.test);
        Predicate::new(move |value| !test(value))
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Predicate {
            test: Rc::clone(&self.test),
        }
    }
}

impl<T> Debug for Predicate<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
