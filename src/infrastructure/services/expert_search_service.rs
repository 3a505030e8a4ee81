//! Expert search - matches the catalog and resolves an insight per match

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::domain::cache::{InsightCache, InsightCacheKey};
use crate::domain::expert::{Catalog, Expert, ExpertResult, TopicMatcher, DEFAULT_PATTERN_SIZE_LIMIT};
use crate::domain::insight::{fallback_insight, InsightGenerator};
use crate::domain::DomainError;

/// Default cap on the number of experts returned per search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Trims and lower-cases a raw topic; `None` when nothing is left
pub fn normalize_topic(raw: &str) -> Option<String> {
    let topic = raw.trim().to_lowercase();

    if topic.is_empty() {
        None
    } else {
        Some(topic)
    }
}

/// Orchestrates a search: cache first, then the generator, then the fallback.
///
/// This service is the only writer to the insight cache, and only stores
/// insights the generator actually produced.
#[derive(Debug, Clone)]
pub struct ExpertSearchService {
    catalog: Arc<Catalog>,
    cache: Arc<dyn InsightCache>,
    generator: Arc<dyn InsightGenerator>,
    max_results: usize,
    pattern_size_limit: usize,
}

impl ExpertSearchService {
    pub fn new(
        catalog: Arc<Catalog>,
        cache: Arc<dyn InsightCache>,
        generator: Arc<dyn InsightGenerator>,
    ) -> Self {
        Self {
            catalog,
            cache,
            generator,
            max_results: DEFAULT_MAX_RESULTS,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }

    pub fn from_config(
        catalog: Arc<Catalog>,
        cache: Arc<dyn InsightCache>,
        generator: Arc<dyn InsightGenerator>,
        config: &SearchConfig,
    ) -> Self {
        Self::new(catalog, cache, generator)
            .with_max_results(config.max_results)
            .with_pattern_size_limit(config.pattern_size_limit)
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_pattern_size_limit(mut self, limit: usize) -> Self {
        self.pattern_size_limit = limit;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn provider_name(&self) -> &'static str {
        self.generator.provider_name()
    }

    /// `false` when every insight will be the fallback template
    pub fn insights_enabled(&self) -> bool {
        self.generator.is_enabled()
    }

    pub async fn cached_insights(&self) -> u64 {
        self.cache.entry_count().await
    }

    /// Search the catalog for a topic.
    ///
    /// Every match is resolved concurrently; the result is truncated to the
    /// configured maximum only after all resolutions finish.
    pub async fn search(&self, raw_topic: &str) -> Result<Vec<ExpertResult>, DomainError> {
        let topic = normalize_topic(raw_topic).ok_or(DomainError::TopicRequired)?;
        let matcher = TopicMatcher::with_size_limit(&topic, self.pattern_size_limit)?;
        let matches = matcher.filter(&self.catalog);

        debug!(topic = %topic, matches = matches.len(), "Resolved topic matches");

        let mut results = join_all(matches.into_iter().map(|expert| {
            let topic = topic.as_str();
            async move {
                let insight = self.resolve_insight(expert, topic).await;
                ExpertResult::new(expert, insight)
            }
        }))
        .await;

        results.truncate(self.max_results);

        Ok(results)
    }

    async fn resolve_insight(&self, expert: &Expert, topic: &str) -> String {
        let key = InsightCacheKey::new(expert.id.clone(), topic);

        match self.cache.get(&key).await {
            Ok(Some(insight)) => {
                debug!(cache_key = %key, "Insight cache hit");
                return insight;
            }
            Ok(None) => {}
            Err(e) => {
                warn!(cache_key = %key, error = %e, "Insight cache lookup failed, treating as miss");
            }
        }

        match self.generator.generate(expert, topic).await {
            Ok(insight) => {
                if let Err(e) = self.cache.put(key.clone(), insight.clone()).await {
                    warn!(cache_key = %key, error = %e, "Failed to store insight");
                }

                insight
            }
            Err(_) => {
                info!(expert_id = %expert.id, "Using fallback insight");
                fallback_insight(expert, topic)
            }
        }
    }
}
