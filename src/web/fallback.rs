use axum::{http::StatusCode, response::IntoResponse};

use super::error::json_error;

/// Fallback for unknown routes.
///
/// Answers `404` with the same JSON error shape the image routes use.
pub async fn not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "not found")
}
