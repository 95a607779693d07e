use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use randpic_web::catalog::{image_catalog::ImageCatalog, random::SeededRandom};
use randpic_web::config::app::AppConfig;
use randpic_web::image::image_rs_processor::ImageRsProcessor;
use randpic_web::web::{random::RandomImageService, router::build_router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = AppConfig::from_env();

    // An empty or unreadable image directory is fatal: never start serving.
    let catalog = ImageCatalog::initialize(
        &cfg.catalog.root,
        &cfg.catalog.extensions,
        Arc::new(SeededRandom::from_time()),
    )
    .with_context(|| format!("loading images from {}", cfg.catalog.root.display()))?;

    let service = RandomImageService::new(
        Arc::new(catalog),
        Arc::new(ImageRsProcessor::new(cfg.image.jpeg_quality)),
        cfg.image.bounds,
    )
    .with_validate_resolved(cfg.image.validate_resolved);

    let app = build_router(Arc::new(service), &cfg);

    let listener = tokio::net::TcpListener::bind(&cfg.http.addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.http.addr))?;
    info!(
        address = %listener.local_addr()?,
        min = cfg.image.bounds.min_size,
        max_width = cfg.image.bounds.max_width,
        max_height = cfg.image.bounds.max_height,
        "server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
