//! Liveness and health endpoints

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

pub const ROOT_MESSAGE: &str = "Expert Finder API is running!";

/// Health response with catalog and cache figures
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub experts: usize,
    pub cached_insights: u64,
    pub insight_provider: String,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// GET / - plain-text liveness message
pub async fn root_check() -> &'static str {
    ROOT_MESSAGE
}

/// GET /health
///
/// Reported as degraded when insight generation is disabled, since every
/// insight will then be the fallback template.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.search_service;
    let status = if service.insights_enabled() {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        experts: service.catalog().len(),
        cached_insights: service.cached_insights().await,
        insight_provider: service.provider_name().to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /live - used for container liveness probes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
