//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::DomainError;

pub const TOPIC_REQUIRED_MESSAGE: &str = "A topic is required in the request body.";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid search query. Please avoid special characters.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Request body is too large.";

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn topic_required() -> Self {
        Self::bad_request(TOPIC_REQUIRED_MESSAGE)
    }

    pub fn invalid_query() -> Self {
        Self::bad_request(INVALID_QUERY_MESSAGE)
    }

    pub fn payload_too_large() -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, PAYLOAD_TOO_LARGE_MESSAGE)
    }

    /// Internal server error; detail stays in the server log
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::TopicRequired => Self::topic_required(),
            DomainError::InvalidQuery { message } => {
                tracing::debug!(reason = %message, "Rejected search query");
                Self::invalid_query()
            }
            DomainError::Provider { .. }
            | DomainError::Catalog { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => {
                error!(error = %err, "Internal server error");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}
