//! Infrastructure layer - External service implementations

pub mod cache;
pub mod catalog;
pub mod insight;
pub mod llm;
pub mod logging;
pub mod services;
