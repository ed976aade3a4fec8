use crate::collections::{Predicate, predicates};
use crate::wrap::Wrap;

/// A wrapped [`Predicate`].
///
/// An absent predicate accepts nothing and rejects everything, and filtering with it keeps every
/// element.
///
/// ```
/// # use fluent_wrap::{wrap, collections::Predicate};
/// let mut short = wrap(Predicate::new(|word: &&str| word.len() < 4));
/// assert!(short.accepts(&["fox", "dog"]));
///
/// let mut words = vec!["brown", "fox"];
/// short.filter(&mut words);
/// assert_eq!(words, ["fox"]);
/// assert!(short.not().rejects(&["fox"]));
/// ```
pub type PredicateWrap<T> = Wrap<Predicate<T>>;

impl<T: 'static> Wrap<Predicate<T>> {
    /// Fills an absent predicate with one that accepts everything.
    pub fn or_true(&mut self) -> &mut Self {
        self.or_else_fill(predicates::accept_all)
    }

    /// Fills an absent predicate with one that rejects everything.
    pub fn or_false(&mut self) -> &mut Self {
        self.or_else_fill(predicates::reject_all)
    }

    /// Drops the predicate unless it accepts every one of `values`.
    pub fn when_accepts(&mut self, values: &[T]) -> &mut Self {
        if !self.accepts(values) {
            self.value = None;
        }
        self
    }

    pub fn accepts(&self, values: &[T]) -> bool {
        predicates::accepts(self.value.as_ref(), values)
    }

    pub fn accepts_all<'a, I: IntoIterator<Item = &'a T>>(&self, values: I) -> bool {
        predicates::accepts_all(self.value.as_ref(), values)
    }

    pub fn rejects(&self, values: &[T]) -> bool {
        predicates::rejects(self.value.as_ref(), values)
    }

    pub fn rejects_all<'a, I: IntoIterator<Item = &'a T>>(&self, values: I) -> bool {
        predicates::rejects_all(self.value.as_ref(), values)
    }

    pub fn rejects_any<'a, I: IntoIterator<Item = &'a T>>(&self, values: I) -> bool {
        predicates::rejects_any(self.value.as_ref(), values)
    }

    pub fn test(&self, value: &T) -> bool {
        self.value.as_ref().is_some_and(|predicate| predicate.test(value))
    }

    /// Keeps the elements of `values` the predicate accepts.
    pub fn filter<'v>(&self, values: &'v mut Vec<T>) -> &'v mut Vec<T> {
        if let Some(predicate) = &self.value {
            values.retain(|value| predicate.test(value));
        }
        values
    }

    /// Removes the elements of `values` the predicate accepts.
    pub fn remove<'v>(&self, values: &'v mut Vec<T>) -> &'v mut Vec<T> {
        if let Some(predicate) = &self.value {
            values.retain(|value| !predicate.test(value));
        }
        values
    }

    /// Collects the accepted elements of `values` into a new vector.
    pub fn filtered<I: IntoIterator<Item = T>>(&self, values: I) -> Vec<T> {
        let mut values = values.into_iter().collect();
        self.filter(&mut values);
        values
    }

    /// Collects the rejected elements of `values` into a new vector.
    pub fn removed<I: IntoIterator<Item = T>>(&self, values: I) -> Vec<T> {
        let mut values = values.into_iter().collect();
        self.remove(&mut values);
        values
    }

    /// Negates the predicate in place.
    pub fn not(&mut self) -> &mut Self {
        self.value = predicates::not(self.value.as_ref());
        self
    }
}
