use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Topic is required")]
    TopicRequired,

    #[error("Invalid search query: {message}")]
    InvalidQuery { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Catalog error: {message}")]
    Catalog { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::InvalidQuery {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error() {
        let error = DomainError::provider("gemini", "HTTP 429: quota exceeded");
        assert_eq!(
            error.to_string(),
            "Provider error: gemini - HTTP 429: quota exceeded"
        );
        assert!(matches!(error, DomainError::Provider { .. }));
    }

    #[test]
    fn test_invalid_query_error() {
        let error = DomainError::invalid_query("pattern too large");
        assert_eq!(error.to_string(), "Invalid search query: pattern too large");
        assert!(matches!(error, DomainError::InvalidQuery { .. }));
    }

    #[test]
    fn test_catalog_error() {
        let error = DomainError::catalog("duplicate expert id 3");
        assert_eq!(error.to_string(), "Catalog error: duplicate expert id 3");
    }
}
