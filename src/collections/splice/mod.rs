mod spliced;

pub use spliced::*;
