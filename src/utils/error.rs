use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error half of every handler result. Serializes as `{"error": "<msg>"}`.
pub struct ApiError(pub StatusCode, pub String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(json!({ "error": self.1 }))).into_response()
    }
}

pub fn internal_error<E>(err: E) -> ApiError
where
    E: std::error::Error,
{
    ApiError(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

pub async fn handler_404() -> impl IntoResponse {
    ApiError(StatusCode::NOT_FOUND, "nothing to see here".to_owned())
}
