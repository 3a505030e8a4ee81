use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, LlmProvider, LlmRequest, LlmResponse, Message, MessageRole};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini (Generative Language API) provider
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            base_url,
        }
    }

    fn generate_content_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_request(&self, request: &LlmRequest) -> serde_json::Value {
        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|message| {
                let role = match message.role {
                    MessageRole::User => "user",
                    MessageRole::Assistant => "model",
                };

                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": message.content_text() }],
                })
            })
            .collect();

        let mut generation_config = serde_json::Map::new();

        if let Some(temp) = request.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temp));
        }

        if let Some(max_tokens) = request.max_tokens {
            generation_config.insert("maxOutputTokens".to_string(), serde_json::json!(max_tokens));
        }

        let mut body = serde_json::json!({ "contents": contents });

        if !generation_config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation_config);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(
        &self,
        model: &str,
        json: serde_json::Value,
    ) -> Result<LlmResponse, DomainError> {
        let response: GeminiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("gemini", format!("Failed to parse response: {}", e))
        })?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("gemini", "No candidates in response"))?;

        let parts = candidate
            .content
            .map(|c| c.parts)
            .filter(|parts| !parts.is_empty())
            .ok_or_else(|| DomainError::provider("gemini", "No content parts in response"))?;

        let text: String = parts.into_iter().filter_map(|p| p.text).collect();
        let model = response.model_version.unwrap_or_else(|| model.to_string());

        Ok(LlmResponse::new(model, Message::assistant(text)))
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GeminiProvider<C> {
    async fn chat(&self, model: &str, request: LlmRequest) -> Result<LlmResponse, DomainError> {
        let url = self.generate_content_url(model);
        let body = self.build_request(&request);
        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(model, response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
