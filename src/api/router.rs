use std::any::Any;

use axum::{
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use super::experts;
use super::health;
use super::middleware::{logging_middleware, security_headers_middleware};
use super::state::AppState;
use super::types::ApiError;

/// Create the router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_check))
        .route("/experts", post(experts::search_experts))
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };

    error!(detail = %detail, "Handler panicked");

    ApiError::internal().into_response()
}
