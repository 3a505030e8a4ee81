//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, CatalogConfig, InsightConfig, InsightProviderType, LogFormat, LoggingConfig,
    SearchConfig, ServerConfig, GEMINI_API_KEY_ENV,
};
