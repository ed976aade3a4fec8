mod enumerable;

pub use enumerable::*;
