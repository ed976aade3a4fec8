use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

/// The textual form a wrapped value takes when the wrapper is displayed.
///
/// Scalars and strings print as their [`Display`](std::fmt::Display) form, sequences print as
/// `[a, b, c]`, and an absent element prints as `null`.
pub trait Represent {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

macro_rules! represent_by_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Represent for $t {
                fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

represent_by_display!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, String,
    str,
);

#[cfg(feature = "decimal")]
represent_by_display!(rust_decimal::Decimal);

#[cfg(feature = "time")]
represent_by_display!(chrono::NaiveDate);

impl Represent for PathBuf {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl<T: Represent + ?Sized> Represent for &T {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).represent(f)
    }
}

impl<T: Represent> Represent for Option<T> {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.represent(f),
            None => f.write_str("null"),
        }
    }
}

impl<E: Represent> Represent for [E] {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            element.represent(f)?;
        }
        f.write_str("]")
    }
}

impl<E: Represent> Represent for Vec<E> {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_slice().represent(f)
    }
}

impl<E: Represent> Represent for Box<[E]> {
    fn represent(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (**self).represent(f)
    }
}

/// Displays any [`Represent`] value, for helpers that need its textual form as a [`String`].
pub(crate) struct Represented<T>(pub T);

impl<T: Represent> Display for Represented<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.represent(f)
    }
}
