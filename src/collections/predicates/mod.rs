mod predicate;
mod predicate_wrap;
mod predicates;
mod tests;

pub use predicate::*;
pub use predicate_wrap::*;
pub use predicates::*;
