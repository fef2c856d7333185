//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use catalyst_domain::error::CatalystError;

/// JSON error body, shaped like the risk backend's (`{"detail": "..."}`).
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`CatalystError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CatalystError);

impl From<CatalystError> for ApiError {
    fn from(err: CatalystError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            CatalystError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatalystError::NotFound(err) => {
                tracing::debug!(id = %err.id, "{} lookup missed", err.entity);
                (StatusCode::NOT_FOUND, format!("{} not found", err.entity))
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
