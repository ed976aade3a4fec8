pub mod panic;
pub mod result;
pub mod sealed;
