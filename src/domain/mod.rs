//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod expert;
pub mod insight;
pub mod llm;

pub use cache::{InsightCache, InsightCacheKey};
pub use error::DomainError;
pub use expert::{Catalog, Expert, ExpertId, ExpertResult, TopicMatcher};
pub use insight::{build_insight_prompt, fallback_insight, InsightGenerator};
pub use llm::{LlmProvider, LlmRequest, LlmRequestBuilder, LlmResponse, Message, MessageRole};
