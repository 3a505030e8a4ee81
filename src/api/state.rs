//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::ExpertSearchService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub search_service: Arc<ExpertSearchService>,
}

impl AppState {
    pub fn new(search_service: ExpertSearchService) -> Self {
        Self {
            search_service: Arc::new(search_service),
        }
    }
}
