//! HTTP error mapping
//!
//! Translates RobotError into status codes and a stable JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use moonbot_core::RobotError;

/// Wrapper making RobotError usable as an axum rejection
#[derive(Debug)]
pub struct ApiError(pub RobotError);

impl From<RobotError> for ApiError {
    fn from(err: RobotError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RobotError::InvalidInput { .. } | RobotError::InvalidDirection { .. } => {
                StatusCode::BAD_REQUEST
            }
            RobotError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!(code = self.0.code(), error = %self.0, "request failed");
        }

        let body = serde_json::json!({
            "code": self.0.code(),
            "error": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}
