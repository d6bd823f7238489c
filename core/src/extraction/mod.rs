pub mod extractor;
pub mod tags;

pub use extractor::{extract_tags, tags_from_object};
pub use tags::*;
