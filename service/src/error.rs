use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::error::RelayError;
use serde_json::json;
use tracing::error;

/// HTTP face of [`RelayError`]: validation failures are the client's fault,
/// everything after validation collapses into an opaque 500.
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            error!("conversion failed: {:?}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let mut message = self.0.to_string();
        if message.is_empty() {
            message = "conversion failed".to_string();
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
