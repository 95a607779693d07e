//! # randpic_web
//!
//! Serves a randomly chosen image from a local directory, resized to the
//! size requested in the URL.
//!
//! The pipeline, leaves first:
//! - [`catalog`] — the image list built once at startup, plus random picks
//! - [`image`] — dimension validation, fit-mode transform, format-preserving encode
//! - [`web`] — axum handlers, error mapping and the router
//!
//! ## Example usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use randpic_web::catalog::{image_catalog::ImageCatalog, random::SeededRandom};
//! use randpic_web::config::app::AppConfig;
//! use randpic_web::image::image_rs_processor::ImageRsProcessor;
//! use randpic_web::web::{random::RandomImageService, router::build_router};
//!
//! let cfg = AppConfig::from_env();
//! let catalog = ImageCatalog::initialize(
//!     &cfg.catalog.root,
//!     &cfg.catalog.extensions,
//!     Arc::new(SeededRandom::from_time()),
//! )
//! .expect("catalog");
//! let service = RandomImageService::new(
//!     Arc::new(catalog),
//!     Arc::new(ImageRsProcessor::new(cfg.image.jpeg_quality)),
//!     cfg.image.bounds,
//! );
//! let app = build_router(Arc::new(service), &cfg);
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use dotenvy;
pub use ::image as image_rs;
pub use rand;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod catalog;
pub mod config;
pub mod error;
pub mod image;
pub mod web;
