use async_trait::async_trait;
use std::fmt::Debug;

use super::{LlmRequest, LlmResponse};
use crate::domain::DomainError;

/// Trait for text generation providers (Gemini, offline, ...)
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a generation request
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;

    /// Whether calls can succeed at all; `false` for a provider with no backend
    fn is_enabled(&self) -> bool {
        true
    }
}
