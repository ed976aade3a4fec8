use crate::collections::Predicate;

/// Negates a possibly absent predicate. An absent predicate stays absent.
pub fn not<T: 'static>(predicate: Option<&Predicate<T>>) -> Option<Predicate<T>> {
    predicate.map(Predicate::negate)
}

/// Returns true if `predicate` accepts every value. An absent predicate accepts nothing.
pub fn accepts<T>(predicate: Option<&Predicate<T>>, values: &[T]) -> bool {
    accepts_all(predicate, values)
}

pub fn accepts_all<'a, T: 'a, I>(predicate: Option<&Predicate<T>>, values: I) -> bool
where
    I: IntoIterator<Item = &'a T>,
{
    predicate.is_some_and(|predicate| values.into_iter().all(|value| predicate.test(value)))
}

/// Returns true if `predicate` rejects every value. An absent predicate rejects everything.
pub fn rejects<T>(predicate: Option<&Predicate<T>>, values: &[T]) -> bool {
    rejects_all(predicate, values)
}

pub fn rejects_all<'a, T: 'a, I>(predicate: Option<&Predicate<T>>, values: I) -> bool
where
    I: IntoIterator<Item = &'a T>,
{
    predicate.is_none_or(|predicate| !values.into_iter().any(|value| predicate.test(value)))
}

/// Returns true if `predicate` rejects at least one value. An empty `values` counts as rejected,
/// as does anything tested by an absent predicate.
pub fn rejects_any<'a, T: 'a, I>(predicate: Option<&Predicate<T>>, values: I) -> bool
where
    I: IntoIterator<Item = &'a T>,
{
    let Some(predicate) = predicate else {
        return true;
    };

    let mut values = values.into_iter().peekable();
    values.peek().is_none() || values.any(|value| !predicate.test(value))
}

/// A predicate accepting everything.
pub fn accept_all<T: 'static>() -> Predicate<T> {
    Predicate::new(|_| true)
}

/// A predicate rejecting everything.
pub fn reject_all<T: 'static>() -> Predicate<T> {
    Predicate::new(|_| false)
}
