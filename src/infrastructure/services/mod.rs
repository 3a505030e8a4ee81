//! Infrastructure services

mod expert_search_service;

pub use expert_search_service::{normalize_topic, ExpertSearchService, DEFAULT_MAX_RESULTS};
