use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::expert::Expert;
use crate::domain::DomainError;

/// Produces a short justification of why an expert matches a topic.
///
/// Implementations have no side effects; any failure is reported as
/// `DomainError::Provider` and the caller decides how to degrade.
#[async_trait]
pub trait InsightGenerator: Send + Sync + Debug {
    async fn generate(&self, expert: &Expert, topic: &str) -> Result<String, DomainError>;

    /// Name of the backing provider, for health reporting
    fn provider_name(&self) -> &'static str;

    /// `false` when every call is known to fail and the fallback will be used
    fn is_enabled(&self) -> bool {
        true
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock generator answering `"{topic} insight for {name}"` unless an
    /// expert is configured to fail
    #[derive(Debug, Default)]
    pub struct MockInsightGenerator {
        failing: Mutex<HashMap<String, String>>,
        calls: AtomicUsize,
    }

    impl MockInsightGenerator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing_for(self, expert_id: impl ToString, error: impl Into<String>) -> Self {
            self.fail_for(expert_id, error);
            self
        }

        pub fn fail_for(&self, expert_id: impl ToString, error: impl Into<String>) {
            self.failing
                .lock()
                .unwrap()
                .insert(expert_id.to_string(), error.into());
        }

        pub fn recover(&self) {
            self.failing.lock().unwrap().clear();
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl InsightGenerator for MockInsightGenerator {
        async fn generate(&self, expert: &Expert, topic: &str) -> Result<String, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(error) = self.failing.lock().unwrap().get(&expert.id.to_string()) {
                return Err(DomainError::provider("mock", error.clone()));
            }

            Ok(format!("{} insight for {}", topic, expert.name))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
