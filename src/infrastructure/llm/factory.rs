use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use super::{DisabledProvider, GeminiProvider, HttpClient};
use crate::config::{InsightConfig, InsightProviderType};
use crate::domain::{DomainError, LlmProvider};

/// Factory for creating the insight text provider
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a provider from configuration, reading the API key from the
    /// process environment when the configuration does not carry one
    pub fn create(config: &InsightConfig) -> Result<Arc<dyn LlmProvider>, DomainError> {
        Self::create_with_key(config, config.resolve_api_key())
    }

    pub fn create_with_key(
        config: &InsightConfig,
        api_key: Option<String>,
    ) -> Result<Arc<dyn LlmProvider>, DomainError> {
        match config.provider {
            InsightProviderType::Disabled => Ok(Arc::new(DisabledProvider::new())),

            InsightProviderType::Gemini => {
                let Some(api_key) = api_key else {
                    warn!("No Gemini API key configured; insights will use the fallback template");
                    return Ok(Arc::new(DisabledProvider::new()));
                };

                if config.timeout_secs == 0 {
                    return Err(DomainError::configuration(
                        "insight.timeout_secs must be greater than zero",
                    ));
                }

                let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;
                let provider = GeminiProvider::with_base_url(client, api_key, &config.base_url);
                Ok(Arc::new(provider))
            }
        }
    }
}
