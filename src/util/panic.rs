/// Asserts that evaluating the expression panics. The expression is run behind
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) so tests can borrow wrappers freely.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:expr) => {
        assert_panics!($run, "expression failed to panic")
    };
    ($run:expr, $msg:literal) => {
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }));
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
