//! Text generation provider implementations

mod disabled;
mod factory;
mod gemini;
mod http_client;

pub use disabled::DisabledProvider;
pub use factory::LlmProviderFactory;
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_BASE_URL};
pub use http_client::{HttpClient, HttpClientTrait};
