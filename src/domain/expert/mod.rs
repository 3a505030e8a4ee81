//! Expert domain - catalog records and topic matching

mod catalog;
mod entity;
mod matcher;
mod result;

pub use catalog::Catalog;
pub use entity::{Expert, ExpertId};
pub use matcher::{TopicMatcher, DEFAULT_PATTERN_SIZE_LIMIT};
pub use result::ExpertResult;
