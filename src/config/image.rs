//! # Image Configuration
//!
//! Provides the parameters of the render pipeline: dimension bounds, the
//! default size the root route redirects to, JPEG quality and whether
//! auto-filled dimensions are bounds-checked.
//!
//! # Example
//! ```rust
//! use randpic_web::config::image::ImageConfig;
//!
//! let cfg = ImageConfig::default();
//! assert_eq!(cfg.bounds.max_width, 1920);
//! assert_eq!(cfg.bounds.max_height, 1080);
//! assert_eq!((cfg.default_width, cfg.default_height), (800, 600));
//! ```

use crate::config::env::{read_flag_from, read_u32_from};
use crate::image::{
    dimensions::{DimensionBounds, MAX_HEIGHT, MAX_WIDTH, MIN_SIZE},
    encoder::DEFAULT_JPEG_QUALITY,
};

/// Configuration for image rendering and request validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageConfig {
    pub bounds: DimensionBounds,
    /// Width used when `/` redirects to a concrete size.
    pub default_width: u32,
    /// Height used when `/` redirects to a concrete size.
    pub default_height: u32,
    pub jpeg_quality: u8,
    /// Also check dimensions filled in from the source's natural size.
    pub validate_resolved: bool,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            bounds: DimensionBounds::default(),
            default_width: 800,
            default_height: 600,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            validate_resolved: false,
        }
    }
}

impl ImageConfig {
    /// Reads `MIN_SIZE`, `MAX_WIDTH`, `MAX_HEIGHT`, `DEFAULT_WIDTH`,
    /// `DEFAULT_HEIGHT`, `JPEG_QUALITY` and `VALIDATE_RESOLVED`.
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let quality = read_u32_from(&provider, "JPEG_QUALITY", DEFAULT_JPEG_QUALITY as u32);

        Self {
            bounds: DimensionBounds::new(
                read_u32_from(&provider, "MIN_SIZE", MIN_SIZE),
                read_u32_from(&provider, "MAX_WIDTH", MAX_WIDTH),
                read_u32_from(&provider, "MAX_HEIGHT", MAX_HEIGHT),
            ),
            default_width: read_u32_from(&provider, "DEFAULT_WIDTH", 800),
            default_height: read_u32_from(&provider, "DEFAULT_HEIGHT", 600),
            jpeg_quality: quality.clamp(1, 100) as u8,
            validate_resolved: read_flag_from(&provider, "VALIDATE_RESOLVED", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_match_service_constants() {
        let cfg = ImageConfig::from_provider(|_| None);
        assert_eq!(cfg, ImageConfig::default());
        assert_eq!(cfg.bounds, DimensionBounds::new(10, 1920, 1080));
        assert_eq!(cfg.jpeg_quality, 75);
        assert!(!cfg.validate_resolved);
    }

    #[test]
    fn reads_overrides() {
        let cfg = ImageConfig::from_provider(provider(&[
            ("MIN_SIZE", "1"),
            ("MAX_WIDTH", "4000"),
            ("MAX_HEIGHT", "3000"),
            ("DEFAULT_WIDTH", "320"),
            ("DEFAULT_HEIGHT", "240"),
            ("JPEG_QUALITY", "90"),
            ("VALIDATE_RESOLVED", "yes"),
        ]));
        assert_eq!(cfg.bounds, DimensionBounds::new(1, 4000, 3000));
        assert_eq!((cfg.default_width, cfg.default_height), (320, 240));
        assert_eq!(cfg.jpeg_quality, 90);
        assert!(cfg.validate_resolved);
    }

    #[test]
    fn jpeg_quality_is_clamped() {
        let cfg = ImageConfig::from_provider(provider(&[("JPEG_QUALITY", "500")]));
        assert_eq!(cfg.jpeg_quality, 100);
        let cfg = ImageConfig::from_provider(provider(&[("JPEG_QUALITY", "0")]));
        assert_eq!(cfg.jpeg_quality, 1);
    }

    #[test]
    fn image_config_clone_and_debug() {
        let cfg = ImageConfig::default();
        let clone = cfg.clone();
        assert_eq!(cfg, clone);

        let dbg_str = format!("{:?}", cfg);
        assert!(dbg_str.contains("1920"));
        assert!(dbg_str.contains("1080"));
    }
}
