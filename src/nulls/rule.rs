use std::cell::RefCell;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::error::UndefinedValue;

/// A policy for absent primitive values.
///
/// The rule decides what an absent character turns into when a caller needs a real one (see
/// [`StringWrap::char_at`](crate::StringWrap::char_at)) and whether absent strings order before or
/// after present ones.
pub trait NullRule: Send + Sync + Debug {
    /// Resolves a possibly absent character.
    ///
    /// # Errors
    /// A rule may refuse to substitute an absent character, returning [`UndefinedValue`].
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue>;

    /// Whether absence orders before every present value.
    fn null_is_less(&self) -> bool {
        true
    }
}

/// Substitutes `'\0'` for an absent character.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNullRule;

impl NullRule for DefaultNullRule {
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue> {
        Ok(value.unwrap_or('\0'))
    }
}

/// Refuses every absent character.
#[derive(Debug, Default, Clone, Copy)]
pub struct UndefinedNullRule;

impl NullRule for UndefinedNullRule {
    fn char_value(&self, value: Option<char>) -> Result<char, UndefinedValue> {
        value.ok_or(UndefinedValue)
    }
}

static RULE: RwLock<Option<Arc<dyn NullRule>>> = RwLock::new(None);

thread_local! {
    static OVERRIDE: RefCell<Option<Arc<dyn NullRule>>> = const { RefCell::new(None) };
}

/// Returns the null rule in effect for the current thread: the innermost [`with_rule`] override,
/// or else the process-wide rule.
pub fn rule() -> Arc<dyn NullRule> {
    if let Some(rule) = OVERRIDE.with_borrow(Option::clone) {
        return rule;
    }

    // The lock only guards a pointer swap, so a poisoned lock still holds a usable rule.
    RULE.read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(default_rule)
}

fn default_rule() -> Arc<dyn NullRule> {
    Arc::new(DefaultNullRule)
}

/// Replaces the process-wide null rule.
pub fn set_rule<R: NullRule + 'static>(rule: R) {
    debug!(?rule, "replacing the process-wide null rule");
    let rule: Arc<dyn NullRule> = Arc::new(rule);
    *RULE.write().unwrap_or_else(PoisonError::into_inner) = Some(rule);
}

/// Restores [`DefaultNullRule`] as the process-wide rule.
pub fn reset_rule() {
    debug!("resetting the process-wide null rule");
    *RULE.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Runs `run` with `rule` in effect on the current thread only, restoring the previous rule
/// afterwards, even if `run` panics.
///
/// ```
/// # use fluent_wrap::nulls::{self, UndefinedNullRule};
/// let absent = fluent_wrap::StringWrap::none();
/// assert_eq!(absent.char_at(0), Ok('\0'));
/// assert!(nulls::with_rule(UndefinedNullRule, || absent.char_at(0)).is_err());
/// ```
pub fn with_rule<R: NullRule + 'static, T>(rule: R, run: impl FnOnce() -> T) -> T {
    struct Restore(Option<Arc<dyn NullRule>>);

    impl Drop for Restore {
        fn drop(&mut self) {
            let previous = self.0.take();
            OVERRIDE.with_borrow_mut(|current| *current = previous);
        }
    }

    let rule: Arc<dyn NullRule> = Arc::new(rule);
    let previous = OVERRIDE.with_borrow_mut(|current| current.replace(rule));
    let _restore = Restore(previous);
    run()
}
