//! In-memory insight cache using moka

use async_trait::async_trait;
use moka::future::Cache as MokaCache;

use crate::domain::cache::{InsightCache, InsightCacheKey};
use crate::domain::DomainError;

/// Thread-safe, unbounded in-memory insight cache.
///
/// Built without capacity, TTL or idle limits: entries live for the whole
/// process.
#[derive(Debug, Clone)]
pub struct InMemoryInsightCache {
    cache: MokaCache<InsightCacheKey, String>,
}

impl InMemoryInsightCache {
    pub fn new() -> Self {
        Self {
            cache: MokaCache::builder().build(),
        }
    }
}

impl Default for InMemoryInsightCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightCache for InMemoryInsightCache {
    async fn get(&self, key: &InsightCacheKey) -> Result<Option<String>, DomainError> {
        Ok(self.cache.get(key).await)
    }

    async fn put(&self, key: InsightCacheKey, insight: String) -> Result<(), DomainError> {
        self.cache.insert(key, insight).await;
        Ok(())
    }

    async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpertId;

    fn key(id: i64, topic: &str) -> InsightCacheKey {
        InsightCacheKey::new(ExpertId::Number(id), topic)
    }

    #[tokio::test]
    async fn test_get_missing() {
        let cache = InMemoryInsightCache::new();
        assert_eq!(cache.get(&key(1, "rust")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = InMemoryInsightCache::new();

        cache
            .put(key(1, "rust"), "Knows Rust well.".to_string())
            .await
            .unwrap();

        assert_eq!(
            cache.get(&key(1, "rust")).await.unwrap().as_deref(),
            Some("Knows Rust well.")
        );
        assert_eq!(cache.get(&key(1, "go")).await.unwrap(), None);
        assert_eq!(cache.get(&key(2, "rust")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = InMemoryInsightCache::new();

        cache.put(key(1, "rust"), "first".to_string()).await.unwrap();
        cache.put(key(1, "rust"), "second".to_string()).await.unwrap();

        assert_eq!(
            cache.get(&key(1, "rust")).await.unwrap().as_deref(),
            Some("second")
        );
        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_entry_count() {
        let cache = InMemoryInsightCache::new();

        for id in 0..10 {
            cache.put(key(id, "topic"), format!("insight {}", id)).await.unwrap();
        }

        assert_eq!(cache.entry_count().await, 10);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = InMemoryInsightCache::new();
        let other = cache.clone();

        cache.put(key(5, "design"), "shared".to_string()).await.unwrap();

        assert_eq!(
            other.get(&key(5, "design")).await.unwrap().as_deref(),
            Some("shared")
        );
    }
}
