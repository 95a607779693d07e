//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Provides a [`CorsLayer`] builder so browser code on other origins can
//! `fetch()` random images.
//!
//! CORS settings are derived from [`CorsConfig`]. Only read methods are
//! allowed. With no configured origins every origin is allowed, which is
//! what a public placeholder-image service usually wants.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use randpic_web::config::web::CorsConfig;
//! use randpic_web::web::cors::build_cors;
//!
//! let cfg = CorsConfig { env: "http://example.com".into() };
//!
//! let app: Router = Router::new()
//!     .route("/hello", get(|| async { "Hello" }))
//!     .layer(build_cors(&cfg));
//! ```

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated list of origins from environment configuration.
///
/// Invalid or empty entries are ignored.
fn parse_origins_from_env(cors_env: &str) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                HeaderValue::from_str(s).ok()
            }
        })
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `HEAD` and `OPTIONS`.
/// - Allows any origin when none are configured, otherwise exactly the list.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origins = parse_origins_from_env(&cors.env);

    let origin_cfg = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
}
