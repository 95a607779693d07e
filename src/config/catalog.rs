//! # Catalog Configuration
//!
//! Where the source images live and which files count as images.
//!
//! # Example
//! ```rust
//! use randpic_web::config::catalog::CatalogConfig;
//! use std::path::PathBuf;
//!
//! let cfg = CatalogConfig::default();
//! assert_eq!(cfg.root, PathBuf::from("./images"));
//! assert!(!cfg.extensions.is_case_insensitive());
//! ```
use std::path::PathBuf;

use crate::catalog::extension::ExtensionPolicy;
use crate::config::env::{read_flag_from, read_string_from};

/// Directory scanned at startup.
pub const DEFAULT_IMAGE_DIR: &str = "./images";

/// Configuration for the image catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    /// Root directory walked recursively at startup.
    pub root: PathBuf,
    /// Which file extensions are admitted.
    pub extensions: ExtensionPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_IMAGE_DIR),
            extensions: ExtensionPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Reads `IMAGE_DIR` and `IMAGE_EXT_CASE_INSENSITIVE`.
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            root: PathBuf::from(read_string_from(&provider, "IMAGE_DIR", DEFAULT_IMAGE_DIR)),
            extensions: ExtensionPolicy::default().case_insensitive(read_flag_from(
                &provider,
                "IMAGE_EXT_CASE_INSENSITIVE",
                false,
            )),
        }
    }
}
