use std::error::Error;
use std::fmt::Display;

use tracing::debug;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself. Backs the panicking twins of the
    /// `try_` constructors.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;

    /// Emits a debug event naming `op` when the result is an [`Err`], then hands the result back
    /// untouched.
    fn traced<D: Display>(self, op: &'static str, subject: D) -> Self;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }

    fn traced<D: Display>(self, op: &'static str, subject: D) -> Self {
        if let Err(error) = &self {
            debug!(op, %subject, %error, "operation failed");
        }
        self
    }
}
