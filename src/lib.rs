//! Expert Finder API
//!
//! Finds catalog experts whose category or bio mentions a topic as a whole
//! word, and explains each match with a generated insight:
//! - JSON file expert catalog loaded at startup
//! - Gemini-backed insight generation with a fixed fallback
//! - In-memory insight cache keyed by expert and topic

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::{
    cache::InMemoryInsightCache,
    catalog::JsonCatalogLoader,
    insight::LlmInsightGenerator,
    llm::LlmProviderFactory,
    services::ExpertSearchService,
};
use tracing::info;

/// Create the application state from configuration.
///
/// Fails when the catalog cannot be read or parsed; the service never starts
/// without experts to search.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let service = create_search_service(config).await?;
    Ok(AppState::new(service))
}

/// Build the search service with its catalog, cache and insight generator
pub async fn create_search_service(config: &AppConfig) -> anyhow::Result<ExpertSearchService> {
    let catalog = JsonCatalogLoader::new(&config.catalog.path).load().await?;

    let provider = LlmProviderFactory::create(&config.insight)?;
    info!(
        provider = provider.provider_name(),
        model = %config.insight.model,
        "Insight provider ready"
    );

    let generator = LlmInsightGenerator::from_config(provider, &config.insight);
    let cache = InMemoryInsightCache::new();

    Ok(ExpertSearchService::from_config(
        Arc::new(catalog),
        Arc::new(cache),
        Arc::new(generator),
        &config.search,
    ))
}
