use crate::util::sealed::Sealed;

/// Three-state logic on an [`Option<bool>`], where [`None`] is neither true nor false.
///
/// ```
/// # use fluent_wrap::prelude::*;
/// let unknown: Option<bool> = None;
/// assert!(!unknown.is_true() && !unknown.is_false());
/// assert!(unknown.or_else_true());
/// assert!(Some(false).is_false());
/// ```
pub trait OptionalBool: Sealed {
    fn is_true(&self) -> bool;

    fn is_false(&self) -> bool;

    fn or_else_true(&self) -> bool;

    fn or_else_false(&self) -> bool;

    /// Runs `action` if the value is present and true.
    fn if_true<F: FnOnce()>(&self, action: F) -> &Self;

    /// Runs `action` if the value is present and false.
    fn if_false<F: FnOnce()>(&self, action: F) -> &Self;
}

impl Sealed for Option<bool> {}

impl OptionalBool for Option<bool> {
    fn is_true(&self) -> bool {
        *self == Some(true)
    }

    fn is_false(&self) -> bool {
        *self == Some(false)
    }

    fn or_else_true(&self) -> bool {
        self.unwrap_or(true)
    }

    fn or_else_false(&self) -> bool {
        self.unwrap_or(false)
    }

    fn if_true<F: FnOnce()>(&self, action: F) -> &Self {
        if self.is_true() {
            action();
        }
        self
    }

    fn if_false<F: FnOnce()>(&self, action: F) -> &Self {
        if self.is_false() {
            action();
        }
        self
    }
}
