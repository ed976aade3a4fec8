use std::cmp::Ordering;

use crate::wrap::Wrap;

/// Ordering checks for any wrapped value with a partial order.
///
/// An absent value on either side makes every ordering check false. Values that do not compare
/// (such as `NaN`) are likewise never less, greater or equal.
impl<T: PartialOrd> Wrap<T> {
    fn compare_with(&self, other: Option<&T>) -> Option<Ordering> {
        self.value.as_ref()?.partial_cmp(other?)
    }

    pub fn is_less_than<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        self.compare_with(other.into()).is_some_and(Ordering::is_lt)
    }

    pub fn is_less_than_or_equal_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        self.compare_with(other.into()).is_some_and(Ordering::is_le)
    }

    pub fn is_greater_than<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        self.compare_with(other.into()).is_some_and(Ordering::is_gt)
    }

    pub fn is_greater_than_or_equal_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        self.compare_with(other.into()).is_some_and(Ordering::is_ge)
    }

    /// Returns true if both sides compare as equal, or if both are absent.
    /// Unlike [`Wrap::is_equal_to`], this goes through [`PartialOrd`].
    pub fn is_equal_by_comparison_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        match (self.value.as_ref(), other.into()) {
            (None, None) => true,
            (Some(value), Some(other)) => value.partial_cmp(other) == Some(Ordering::Equal),
            _ => false,
        }
    }

    pub fn is_not_equal_by_comparison_to<'b>(&self, other: impl Into<Option<&'b T>>) -> bool
    where
        T: 'b,
    {
        !self.is_equal_by_comparison_to(other)
    }
}
