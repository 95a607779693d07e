//! # Random Image Handlers
//!
//! Axum endpoints that turn a URL into a render request.
//!
//! ## Routes
//! - `GET /` — `301` redirect to `/{default_width}/{default_height}`.
//! - `GET /{width}/{height}` — a random catalog image at that size.
//!   A `0` segment leaves that side at the source's natural size.
//!   Optional `?fit=fill|exact-fill|crop|stretch` (default `exact-fill`).
//!
//! ## Example
//! ```rust,ignore
//! use axum::{Router, routing::get, Extension};
//! use std::sync::Arc;
//! use randpic_web::web::random::{random_image_handler, RandomImageService};
//!
//! let app = Router::new()
//!     .route("/{width}/{height}", get(random_image_handler))
//!     .layer(Extension(Arc::new(service)));
//! ```

use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::warn;

use super::service::RandomImageService;
use crate::config::image::ImageConfig;
use crate::image::{dimensions::DimensionRequest, transform::FitMode};
use crate::web::error::json_error;

/// Query string accepted by [`random_image_handler`].
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Fit mode name; absent means exact-fill.
    pub fit: Option<String>,
}

/// Redirects `/` to the configured default size.
pub async fn root_redirect_handler(Extension(cfg): Extension<ImageConfig>) -> impl IntoResponse {
    let location = format!("/{}/{}", cfg.default_width, cfg.default_height);
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)])
}

/// Serves a random image resized to `/{width}/{height}`.
///
/// ## Returns
/// - `200 OK` with the encoded image; `Content-Type` matches the codec
/// - `400 BAD REQUEST` for unparsable segments, an unknown `fit`, or
///   out-of-bounds dimensions
/// - `503 SERVICE UNAVAILABLE` if the picked file could not be read
/// - `500 INTERNAL SERVER ERROR` for unsupported formats and encode failures
pub async fn random_image_handler(
    Extension(service): Extension<Arc<RandomImageService>>,
    Path((width, height)): Path<(String, String)>,
    Query(query): Query<RenderQuery>,
) -> Response {
    let Some(width) = parse_segment(&width) else {
        return json_error(StatusCode::BAD_REQUEST, "Invalid width");
    };
    let Some(height) = parse_segment(&height) else {
        return json_error(StatusCode::BAD_REQUEST, "Invalid height");
    };
    // Numeric but too large for a pixel count: a bounds problem, not a syntax one.
    let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
        return service.bounds().out_of_bounds().into_response();
    };
    let mode = match query.fit.as_deref().map(str::parse::<FitMode>) {
        None => FitMode::default(),
        Some(Ok(mode)) => mode,
        Some(Err(e)) => return json_error(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let req = DimensionRequest::new(width, height);

    // Decode, resize and encode are CPU-bound.
    let rendered = tokio::task::spawn_blocking(move || service.render(req, mode)).await;

    match rendered {
        Ok(Ok(img)) => (
            [
                (header::CONTENT_TYPE, img.content_type()),
                (header::CACHE_CONTROL, "no-store"),
            ],
            img.bytes,
        )
            .into_response(),
        Ok(Err(e)) => e.into_response(),
        Err(e) => {
            warn!("render task failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "render task failed")
        }
    }
}

/// Parses a path segment as a non-negative integer, wider than `u32` so that
/// overlong numbers can be told apart from garbage.
fn parse_segment(segment: &str) -> Option<u64> {
    segment.trim().parse::<u64>().ok()
}
