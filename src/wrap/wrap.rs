use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ptr;

use crate::error::AbsentValue;
use crate::text::StringWrap;
use crate::wrap::{Represent, Wrappable};

/// A fluent adapter holding exactly one, possibly absent, value.
///
/// Every operation is absence tolerant: on an absent value it either returns a neutral answer
/// (`false`, `0`, [`None`]) or does nothing. Mutating operations change the held value in place
/// and hand back `&mut Self`, so calls chain on a binding or on a temporary:
///
/// ```
/// # use fluent_wrap::wrap;
/// let mut name = wrap("  rasael ");
/// name.trim().reversed();
/// assert_eq!(name.to_string(), "leasar");
///
/// let absent = fluent_wrap::StringWrap::none();
/// assert_eq!(absent.to_string(), "null");
/// ```
///
/// The operations available depend on the wrapped type. The aliases [`StringWrap`],
/// [`ListWrap`](crate::ListWrap), [`ArrayWrap`](crate::ArrayWrap), [`IntWrap`](crate::IntWrap)
/// and friends name the supported instantiations.
///
/// Equality, ordering and hashing delegate to the wrapped value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Wrap<T> {
    pub(crate) value: Option<T>,
}

impl<T> Wrap<T> {
    /// Wraps a present value.
    ///
    /// Only [`Wrappable`] types are accepted, which rules out wrapping another wrapper.
    pub fn of(value: T) -> Wrap<T>
    where
        T: Wrappable,
    {
        Wrap { value: Some(value) }
    }

    /// Creates an absent wrapper.
    pub const fn none() -> Wrap<T> {
        Wrap { value: None }
    }

    pub(crate) const fn from_option(value: Option<T>) -> Wrap<T> {
        Wrap { value }
    }

    /// Returns a reference to the wrapped value, if present.
    pub const fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub const fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Unwraps the adapter, returning the held value.
    pub fn into_inner(self) -> Option<T> {
        self.value
    }

    /// Replaces the held value.
    pub fn set_value(&mut self, value: Option<T>) -> &mut Self {
        self.value = value;
        self
    }

    /// Takes the held value out, leaving the wrapper absent.
    pub const fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    // ---------------------------------------------------------------------------------------------
    // Absence routing
    // ---------------------------------------------------------------------------------------------

    /// Returns self if a value is present, otherwise a new wrapper around `or`.
    pub fn or(self, or: T) -> Wrap<T> {
        match self.value {
            Some(_) => self,
            None => Wrap::from_option(Some(or)),
        }
    }

    /// Returns the held value, or `or_else` when absent.
    pub fn or_else(self, or_else: T) -> T {
        self.value.unwrap_or(or_else)
    }

    pub fn or_else_get<F: FnOnce() -> T>(self, supplier: F) -> T {
        self.value.unwrap_or_else(supplier)
    }

    /// Fills an absent wrapper with the supplied value. A present value is left alone.
    pub fn or_else_fill<F: FnOnce() -> T>(&mut self, supplier: F) -> &mut Self {
        if self.value.is_none() {
            self.value = Some(supplier());
        }
        self
    }

    /// Forces the value out of the wrapper.
    ///
    /// # Errors
    /// Returns [`AbsentValue`] if the wrapper is empty.
    pub fn or_else_throw(self) -> Result<T, AbsentValue> {
        self.value.ok_or(AbsentValue)
    }

    /// Forces the value out of the wrapper, producing a caller supplied error when absent.
    ///
    /// # Errors
    /// Returns the error built by `error` if the wrapper is empty.
    pub fn or_else_err<E, F: FnOnce() -> E>(self, error: F) -> Result<T, E> {
        self.value.ok_or_else(error)
    }

    pub fn if_null<F: FnOnce()>(&mut self, action: F) -> &mut Self {
        if self.value.is_none() {
            action();
        }
        self
    }

    pub fn if_not_null<F: FnOnce(&T)>(&mut self, action: F) -> &mut Self {
        if let Some(value) = &self.value {
            action(value);
        }
        self
    }

    pub const fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub const fn is_not_null(&self) -> bool {
        self.value.is_some()
    }

    // ---------------------------------------------------------------------------------------------
    // Identity and equality
    // ---------------------------------------------------------------------------------------------

    /// Returns true if `other` is the very value held by this wrapper, compared by address.
    pub fn is_same_as(&self, other: &T) -> bool {
        self.value.as_ref().is_some_and(|value| ptr::eq(value, other))
    }

    /// Compares the held value with `other`. Two absences are equal.
    pub fn is_equal_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: PartialEq + 'b,
    {
        self.value.as_ref() == other.into()
    }

    pub fn is_not_equal_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: PartialEq + 'b,
    {
        !self.is_equal_to(other)
    }

    /// Hashes the held value with the std [`DefaultHasher`]. An absent value hashes to `0`.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        match &self.value {
            Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            },
            None => 0,
        }
    }

    pub fn has_hash_code(&self, hash_code: u64) -> bool
    where
        T: Hash,
    {
        self.hash_code() == hash_code
    }

    /// Returns the representation of the held value as a new [`StringWrap`]. An absent value is
    /// represented as `null`.
    pub fn as_string(&self) -> StringWrap
    where
        T: Represent,
    {
        Wrap::from_option(Some(self.to_string()))
    }
}

impl<T> Default for Wrap<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Option<T>> for Wrap<T>
where
    T: Wrappable,
{
    fn from(value: Option<T>) -> Self {
        Wrap::from_option(value)
    }
}

impl<T: Hash> Hash for Wrap<T> {
    /// Hashes the held value alone. An absent value feeds nothing to the hasher.
    fn hash<H: Hasher>(&self, state: &mut H) {
        if let Some(value) = &self.value {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Wrap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Wrap").field(value).finish(),
            None => f.write_str("Wrap(null)"),
        }
    }
}

impl<T: Represent> Display for Wrap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => value.represent(f),
            None => f.write_str("null"),
        }
    }
}
