//! Request handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{debug, error, warn};

use super::AppState;
use crate::application::NO_TEXT_MESSAGE;
use crate::domain::{AnalysisResult, DomainError, ErrorBody, VerifyEnvelope, VerifyRequest};

/// Error message for any failure other than missing input.
pub const VERIFY_FAILED_MESSAGE: &str = "Failed to verify news";

const INDEX_HTML: &str = include_str!("static/index.html");
/// Replaced in the page by the serialized [`AnalysisResult::client_failure`].
const CLIENT_FAILURE_PLACEHOLDER: &str = "__CLIENT_FAILURE__";

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    StatusCode::OK
}

/// Single-page UI.
pub async fn index() -> Html<String> {
    let failure = serde_json::to_string(&AnalysisResult::client_failure())
        .unwrap_or_else(|_| "null".to_string());
    Html(INDEX_HTML.replace(CLIENT_FAILURE_PLACEHOLDER, &failure))
}

/// `POST /api/verify-news`: analyze `{"text": ...}` and return `{"result": ...}`.
pub async fn verify_news(
    State(state): State<AppState>,
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Response {
    let text = match payload {
        Ok(Json(request)) => request.text().map(str::to_string),
        // The body could not be read at all (e.g. over the size limit).
        Err(rejection @ JsonRejection::BytesRejection(_)) => {
            warn!("Rejected verify request body: {}", rejection.body_text());
            return (rejection.status(), Json(ErrorBody::new(rejection.body_text())))
                .into_response();
        }
        Err(rejection) => {
            debug!("Rejected verify request body: {}", rejection.body_text());
            None
        }
    };

    let Some(text) = text else {
        return bad_request();
    };

    match state.verify_use_case.execute(&text).await {
        Ok(result) => Json(VerifyEnvelope::new(result)).into_response(),
        Err(DomainError::InvalidInput(_)) => bad_request(),
        Err(e) => {
            error!("Verification failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(VERIFY_FAILED_MESSAGE)),
            )
                .into_response()
        }
    }
}

fn bad_request() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody::new(NO_TEXT_MESSAGE)),
    )
        .into_response()
}
