//! Whole-word topic matching over the catalog

use regex::{Regex, RegexBuilder};

use super::{Catalog, Expert};
use crate::domain::DomainError;

/// Default upper bound on the compiled size of a topic pattern
pub const DEFAULT_PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Matches experts whose category or bio contains a topic as a whole word.
///
/// The topic is always treated as literal text. A match must be preceded by
/// the start of the text or a non-word character, and followed by the end of
/// the text or a non-word character, so `"ai"` never matches inside `"air"`.
/// Callers reject empty topics before building a matcher.
#[derive(Debug, Clone)]
pub struct TopicMatcher {
    regex: Regex,
}

impl TopicMatcher {
    pub fn new(topic: &str) -> Result<Self, DomainError> {
        Self::with_size_limit(topic, DEFAULT_PATTERN_SIZE_LIMIT)
    }

    pub fn with_size_limit(topic: &str, size_limit: usize) -> Result<Self, DomainError> {
        let pattern = format!(r"(?:^|\W){}(?:\W|$)", regex::escape(topic));

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(size_limit)
            .build()
            .map_err(|e| DomainError::invalid_query(e.to_string()))?;

        Ok(Self { regex })
    }

    pub fn is_match(&self, expert: &Expert) -> bool {
        self.regex.is_match(&expert.category) || self.regex.is_match(&expert.bio)
    }

    /// Matching experts in catalog order
    pub fn filter<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Expert> {
        catalog.iter().filter(|e| self.is_match(e)).collect()
    }
}
