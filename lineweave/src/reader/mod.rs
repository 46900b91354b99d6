pub mod annotated;
pub mod basic;

pub use annotated::AnnotatedReader;
pub use basic::{FileReader, LineIter};
