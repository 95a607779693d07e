//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for the random image server:
//! catalog location, render parameters, HTTP listener and CORS.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is initialized once at startup and shared read-only.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `IMAGE_DIR` | Directory scanned for source images | `./images` |
//! | `IMAGE_EXT_CASE_INSENSITIVE` | Accept `.JPG` / `.PNG` | `false` |
//! | `HTTP_ADDR` | Listener address | `0.0.0.0:8080` |
//! | `DEFAULT_WIDTH` / `DEFAULT_HEIGHT` | Target of the `/` redirect | `800` / `600` |
//! | `MIN_SIZE` / `MAX_WIDTH` / `MAX_HEIGHT` | Dimension bounds | `10` / `1920` / `1080` |
//! | `JPEG_QUALITY` | JPEG encode quality | `75` |
//! | `VALIDATE_RESOLVED` | Bounds-check auto-filled dimensions | `false` |
//! | `CORS_ORIGINS` | Allowed origins for CORS | `""` (any) |
//!
//! # Example
//! ```rust,no_run
//! use randpic_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("serving {:?} on {}", cfg.catalog.root, cfg.http.addr);
//! ```

use std::env;

use crate::config::{
    catalog::CatalogConfig,
    env::read_string,
    image::ImageConfig,
    web::{CorsConfig, DEFAULT_HTTP_ADDR, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Source image catalog.
    pub catalog: CatalogConfig,
    /// Render and validation parameters.
    pub image: ImageConfig,
    /// HTTP listener configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AppConfig {
            catalog: CatalogConfig::from_env(),
            image: ImageConfig::from_env(),
            http: HttpConfig {
                addr: read_string("HTTP_ADDR", DEFAULT_HTTP_ADDR),
            },
            cors: CorsConfig {
                env: env::var("CORS_ORIGINS").unwrap_or_default(),
            },
        }
    }
}
