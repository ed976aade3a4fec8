/// A supertrait for public traits that only this crate may implement.
pub trait Sealed {}
