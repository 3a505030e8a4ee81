//! Insight cache keys

use std::fmt;

use crate::domain::expert::ExpertId;

/// Identifies one memoized insight: an expert paired with a normalized topic.
///
/// The topic must already be normalized (trimmed, lower-cased) by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsightCacheKey {
    expert_id: ExpertId,
    topic: String,
}

impl InsightCacheKey {
    pub fn new(expert_id: ExpertId, topic: impl Into<String>) -> Self {
        Self {
            expert_id,
            topic: topic.into(),
        }
    }
}

impl fmt::Display for InsightCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.expert_id, self.topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_key_display() {
        let key = InsightCacheKey::new(ExpertId::Number(4), "career");
        assert_eq!(key.to_string(), "4-career");
    }

    #[test]
    fn test_key_identity() {
        let mut keys = HashSet::new();
        keys.insert(InsightCacheKey::new(ExpertId::Number(1), "rust"));
        keys.insert(InsightCacheKey::new(ExpertId::Number(1), "rust"));
        keys.insert(InsightCacheKey::new(ExpertId::Number(2), "rust"));
        keys.insert(InsightCacheKey::new(ExpertId::Number(1), "go"));

        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_numeric_and_text_ids_are_distinct() {
        let numeric = InsightCacheKey::new(ExpertId::Number(1), "rust");
        let text = InsightCacheKey::new(ExpertId::from("1"), "rust");

        assert_ne!(numeric, text);
    }
}
