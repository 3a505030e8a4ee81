use serde::Deserialize;

use crate::domain::expert::DEFAULT_PATTERN_SIZE_LIMIT;

/// Environment variable consulted when `insight.api_key` is not set
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub insight: InsightConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where the expert catalog is read from at startup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum number of experts returned per search
    pub max_results: usize,
    /// Upper bound on the compiled topic pattern, in bytes
    pub pattern_size_limit: usize,
}

/// Which text generation backend produces insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsightProviderType {
    #[default]
    Gemini,
    Disabled,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    pub provider: InsightProviderType,
    pub model: String,
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data.json".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 5,
            pattern_size_limit: DEFAULT_PATTERN_SIZE_LIMIT,
        }
    }
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            provider: InsightProviderType::default(),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: None,
            timeout_secs: 30,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl InsightConfig {
    /// API key from configuration, falling back to `GEMINI_API_KEY`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key
            .clone()
            .or_else(|| lookup(GEMINI_API_KEY_ENV))
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.catalog.path, "data.json");
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.insight.model, "gemini-2.5-flash");
        assert_eq!(config.insight.provider, InsightProviderType::Gemini);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let source = config::Config::builder()
            .set_override("server.port", 9100)
            .unwrap()
            .set_override("insight.provider", "disabled")
            .unwrap()
            .build()
            .unwrap();

        let config: AppConfig = source.try_deserialize().unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.insight.provider, InsightProviderType::Disabled);
        assert_eq!(config.search.max_results, 5);
    }

    #[test]
    fn test_api_key_prefers_config() {
        let config = InsightConfig {
            api_key: Some("from-config".to_string()),
            ..InsightConfig::default()
        };

        let key = config.resolve_api_key_with(|_| Some("from-env".to_string()));
        assert_eq!(key.as_deref(), Some("from-config"));
    }

    #[test]
    fn test_api_key_falls_back_to_env() {
        let config = InsightConfig::default();

        let key = config.resolve_api_key_with(|name| {
            assert_eq!(name, GEMINI_API_KEY_ENV);
            Some("from-env".to_string())
        });
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let config = InsightConfig {
            api_key: Some("   ".to_string()),
            ..InsightConfig::default()
        };

        assert!(config.resolve_api_key_with(|_| None).is_none());
    }
}
