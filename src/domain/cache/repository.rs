//! Insight cache trait definition

use std::fmt::Debug;

use async_trait::async_trait;

use super::InsightCacheKey;
use crate::domain::DomainError;

/// Process-wide memo of generated insights.
///
/// Entries never expire. Concurrent first-use of the same key may write twice;
/// the last write wins.
#[async_trait]
pub trait InsightCache: Send + Sync + Debug {
    /// Gets a previously stored insight
    async fn get(&self, key: &InsightCacheKey) -> Result<Option<String>, DomainError>;

    /// Stores an insight for the key
    async fn put(&self, key: InsightCacheKey, insight: String) -> Result<(), DomainError>;

    /// Returns approximate number of entries in the cache
    async fn entry_count(&self) -> u64;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock cache for testing
    #[derive(Debug, Default)]
    pub struct MockInsightCache {
        entries: Mutex<HashMap<InsightCacheKey, String>>,
        error: Mutex<Option<String>>,
    }

    impl MockInsightCache {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every subsequent operation fail with the given message
        pub fn set_error(&self, error: impl Into<String>) {
            *self.error.lock().unwrap() = Some(error.into());
        }

        fn check_error(&self) -> Result<(), DomainError> {
            match self.error.lock().unwrap().as_ref() {
                Some(e) => Err(DomainError::internal(e.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl InsightCache for MockInsightCache {
        async fn get(&self, key: &InsightCacheKey) -> Result<Option<String>, DomainError> {
            self.check_error()?;
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn put(&self, key: InsightCacheKey, insight: String) -> Result<(), DomainError> {
            self.check_error()?;
            self.entries.lock().unwrap().insert(key, insight);
            Ok(())
        }

        async fn entry_count(&self) -> u64 {
            self.entries.lock().unwrap().len() as u64
        }
    }
}
