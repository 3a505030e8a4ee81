//! Expert search endpoint

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use super::state::AppState;
use super::types::{ApiError, SearchExpertsRequest, SearchExpertsResponse};

/// POST /experts
///
/// A body that is not JSON, or whose `topic` is not a string, is treated the
/// same as a missing topic. A body over the size limit is a 413.
pub async fn search_experts(
    State(state): State<AppState>,
    payload: Result<Json<SearchExpertsRequest>, JsonRejection>,
) -> Result<Json<SearchExpertsResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let status = rejection.status();
            debug!(
                status = %status.as_u16(),
                reason = %rejection.body_text(),
                "Unreadable search request body"
            );

            if status == StatusCode::PAYLOAD_TOO_LARGE {
                return Err(ApiError::payload_too_large());
            }

            SearchExpertsRequest::default()
        }
    };

    let topic = request.topic.unwrap_or_default();
    debug!(topic = %topic, "Searching experts");

    let experts = state.search_service.search(&topic).await?;

    Ok(Json(SearchExpertsResponse::new(experts)))
}
