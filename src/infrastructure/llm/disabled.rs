use async_trait::async_trait;

use crate::domain::{DomainError, LlmProvider, LlmRequest, LlmResponse};

/// Provider used when no API key is configured.
///
/// Every call fails, so every insight resolves to the fallback template.
#[derive(Debug, Default)]
pub struct DisabledProvider;

impl DisabledProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmProvider for DisabledProvider {
    async fn chat(&self, _model: &str, _request: LlmRequest) -> Result<LlmResponse, DomainError> {
        Err(DomainError::provider(
            self.provider_name(),
            "no API key configured for insight generation",
        ))
    }

    fn provider_name(&self) -> &'static str {
        "disabled"
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_provider_always_fails() {
        let provider = DisabledProvider::new();
        let request = LlmRequest::builder().user("Hello").build();

        let err = provider.chat("any", request).await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
        assert!(err.to_string().contains("no API key"));
    }

    #[test]
    fn test_disabled_provider_reports_disabled() {
        assert!(!DisabledProvider::new().is_enabled());
    }
}
