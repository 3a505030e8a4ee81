//! LLM-based insight generator
//!
//! Asks a text generation provider why an expert fits a search topic.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::InsightConfig;
use crate::domain::insight::{build_insight_prompt, InsightGenerator};
use crate::domain::llm::{LlmProvider, LlmRequest};
use crate::domain::{DomainError, Expert};

/// Insight generator backed by an `LlmProvider`
#[derive(Debug)]
pub struct LlmInsightGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

impl LlmInsightGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn from_config(provider: Arc<dyn LlmProvider>, config: &InsightConfig) -> Self {
        Self::new(provider, config.model.clone())
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_output_tokens)
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    async fn request_insight(&self, expert: &Expert, topic: &str) -> Result<String, DomainError> {
        let request = LlmRequest::builder()
            .user(build_insight_prompt(expert, topic))
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build();

        let response = self.provider.chat(&self.model, request).await?;
        let insight = response.content().trim();

        if insight.is_empty() {
            return Err(DomainError::provider(
                self.provider.provider_name(),
                "Empty response from provider",
            ));
        }

        Ok(insight.to_string())
    }
}

#[async_trait]
impl InsightGenerator for LlmInsightGenerator {
    async fn generate(&self, expert: &Expert, topic: &str) -> Result<String, DomainError> {
        debug!(expert_id = %expert.id, topic, model = %self.model, "Generating insight");

        self.request_insight(expert, topic).await.map_err(|e| {
            warn!(expert_id = %expert.id, error = %e, "Insight generation failed");

            match e {
                DomainError::Provider { .. } => e,
                other => DomainError::provider(self.provider.provider_name(), other.to_string()),
            }
        })
    }

    fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    fn is_enabled(&self) -> bool {
        self.provider.is_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::llm::MockLlmProvider;

    fn expert() -> Expert {
        Expert::new(3, "Dana Reyes", "Career Coaching", "Guides career changers.")
    }

    #[tokio::test]
    async fn test_generate_trims_response() {
        let provider = Arc::new(
            MockLlmProvider::new("mock").with_response("\n  Dana guides career changers.  \n"),
        );
        let generator = LlmInsightGenerator::new(provider.clone(), "gemini-2.5-flash");

        let insight = generator.generate(&expert(), "career").await.unwrap();

        assert_eq!(insight, "Dana guides career changers.");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_failure_is_unavailable() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_error("quota exceeded"));
        let generator = LlmInsightGenerator::new(provider, "gemini-2.5-flash");

        let err = generator.generate(&expert(), "career").await.unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_blank_response_is_unavailable() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("   "));
        let generator = LlmInsightGenerator::new(provider, "gemini-2.5-flash");

        let err = generator.generate(&expert(), "career").await.unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
        assert!(err.to_string().contains("Empty response"));
    }

    #[tokio::test]
    async fn test_from_config() {
        let provider = Arc::new(MockLlmProvider::new("mock").with_response("ok"));
        let config = InsightConfig {
            model: "gemini-test".to_string(),
            temperature: Some(0.2),
            max_output_tokens: Some(80),
            ..InsightConfig::default()
        };

        let generator = LlmInsightGenerator::from_config(provider, &config);

        assert_eq!(generator.model, "gemini-test");
        assert_eq!(generator.temperature, Some(0.2));
        assert_eq!(generator.max_tokens, Some(80));
        assert_eq!(generator.provider_name(), "mock");
        assert!(generator.is_enabled());
    }

    #[test]
    fn test_disabled_provider_disables_generator() {
        let generator = LlmInsightGenerator::new(
            Arc::new(crate::infrastructure::llm::DisabledProvider::new()),
            "gemini-2.5-flash",
        );

        assert!(!generator.is_enabled());
        assert_eq!(generator.provider_name(), "disabled");
    }
}
