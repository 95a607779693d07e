//! HTTP mapping for pipeline failures.
//!
//! Every error becomes a JSON body of the form `{"error": "..."}`. The
//! message is public-facing: file paths and codec internals stay in the
//! logs only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::warn;

use crate::error::pipeline::PipelineError;

/// Builds a `{"error": message}` response.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    let message: String = message.into();
    (status, Json(json!({ "error": message }))).into_response()
}

impl PipelineError {
    /// Status code the request layer answers with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::InvalidDimensions { .. } => StatusCode::BAD_REQUEST,
            PipelineError::SourceReadFailure { .. } => StatusCode::SERVICE_UNAVAILABLE,
            PipelineError::UnsupportedFormat
            | PipelineError::EncodeFailure { .. }
            | PipelineError::CatalogEmpty { .. }
            | PipelineError::CatalogInitFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            PipelineError::InvalidDimensions { .. } | PipelineError::UnsupportedFormat => {
                self.to_string()
            }
            PipelineError::SourceReadFailure { .. } => "Failed to load image".into(),
            PipelineError::EncodeFailure { codec, .. } => format!("{codec} encoding failed"),
            PipelineError::CatalogEmpty { .. } | PipelineError::CatalogInitFailure { .. } => {
                "Image catalog unavailable".into()
            }
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        }
        json_error(status, self.public_message())
    }
}
