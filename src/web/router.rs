//! Route table for the random image server.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use crate::config::app::AppConfig;
use crate::web::{
    cors::build_cors,
    fallback::not_found,
    random::{RandomImageService, random_image_handler, root_redirect_handler},
};

/// Builds the application router.
///
/// The service is shared by reference across all requests; nothing in it is
/// rebuilt per request.
pub fn build_router(service: Arc<RandomImageService>, cfg: &AppConfig) -> Router {
    Router::new()
        .route("/", get(root_redirect_handler))
        .route("/{width}/{height}", get(random_image_handler))
        .fallback(not_found)
        .layer(Extension(service))
        .layer(Extension(cfg.image.clone()))
        .layer(build_cors(&cfg.cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use image::{DynamicImage, RgbImage};
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::catalog::{image_catalog::ImageCatalog, random::SeededRandom};
    use crate::image::image_rs_processor::ImageRsProcessor;

    fn router(dir: &TempDir) -> Router {
        DynamicImage::ImageRgb8(RgbImage::new(64, 64))
            .save(dir.path().join("a.png"))
            .unwrap();
        let cfg = AppConfig::default();
        let catalog = ImageCatalog::initialize(
            dir.path(),
            &cfg.catalog.extensions,
            Arc::new(SeededRandom::with_seed(9)),
        )
        .unwrap();
        let service = RandomImageService::new(
            Arc::new(catalog),
            Arc::new(ImageRsProcessor::new(cfg.image.jpeg_quality)),
            cfg.image.bounds,
        );
        build_router(Arc::new(service), &cfg)
    }

    async fn call(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn wires_redirect_image_and_fallback() {
        let dir = TempDir::new().unwrap();
        let app = router(&dir);

        let res = call(app.clone(), "/").await;
        assert_eq!(res.status(), StatusCode::MOVED_PERMANENTLY);

        let res = call(app.clone(), "/32/16").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "image/png");

        let res = call(app, "/a/b/c").await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
