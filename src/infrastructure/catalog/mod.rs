//! Catalog infrastructure - loading expert records at startup

mod json_file;

pub use json_file::JsonCatalogLoader;
