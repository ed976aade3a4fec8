mod stream;
mod stream_wrap;
mod supplier;
mod tests;

pub use stream::*;
pub use stream_wrap::*;
pub use supplier::*;
