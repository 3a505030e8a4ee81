use serde::{Deserialize, Serialize};

use super::Message;

/// Response from an insight provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub model: String,
    pub message: Message,
}

impl LlmResponse {
    pub fn new(model: String, message: Message) -> Self {
        Self { model, message }
    }

    pub fn content(&self) -> &str {
        self.message.content_text()
    }
}
