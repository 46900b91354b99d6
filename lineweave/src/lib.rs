pub mod config;
pub mod document;
pub mod errors;
pub mod reader;
pub mod stats;
pub mod style;

pub use config::ReadOptions;
pub use document::Document;
pub use errors::{ReaderError, ReaderResult};
pub use reader::{AnnotatedReader, FileReader};
pub use stats::Stats;
pub use style::{paint, Color};
