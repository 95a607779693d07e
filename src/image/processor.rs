//! # Image Processing Abstractions
//!
//! Defines the backend-agnostic seam between the random image service and
//! the library that actually decodes, transforms and encodes pixels.
//!
//! This module provides:
//! - [`DecodedImage`] — a raster tagged with the codec it was decoded from.
//! - [`ImageProcessor`] — the trait a backend implements (e.g. `image-rs`).
//!
//! # Example
//! ```rust
//! use std::path::Path;
//! use image::{DynamicImage, RgbImage};
//! use randpic_web::error::pipeline::PipelineError;
//! use randpic_web::image::dimensions::DimensionRequest;
//! use randpic_web::image::encoder::{EncodedImage, SourceFormat};
//! use randpic_web::image::processor::{DecodedImage, ImageProcessor};
//! use randpic_web::image::transform::FitMode;
//!
//! struct BlankProcessor;
//!
//! impl ImageProcessor for BlankProcessor {
//!     fn decode(&self, _path: &Path) -> Result<DecodedImage, PipelineError> {
//!         Ok(DecodedImage::new(
//!             DynamicImage::ImageRgb8(RgbImage::new(40, 20)),
//!             SourceFormat::Png,
//!         ))
//!     }
//!
//!     fn render_same_format(
//!         &self,
//!         source: &DecodedImage,
//!         _target: DimensionRequest,
//!         _mode: FitMode,
//!     ) -> Result<EncodedImage, PipelineError> {
//!         Ok(EncodedImage { bytes: vec![0; 4], format: source.format })
//!     }
//! }
//!
//! let p = BlankProcessor;
//! let src = p.decode(Path::new("any.png")).unwrap();
//! assert_eq!(src.dimensions(), (40, 20));
//! ```

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use super::{
    dimensions::DimensionRequest,
    encoder::{EncodedImage, SourceFormat},
    transform::FitMode,
};
use crate::error::pipeline::PipelineError;

/// An in-memory raster plus the codec it came from.
///
/// Owned by exactly one request and dropped when that request finishes.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub format: SourceFormat,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, format: SourceFormat) -> Self {
        Self { image, format }
    }

    /// Natural `(width, height)` of the source.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Trait defining the decode and render steps of the pipeline.
///
/// Implementations must be shareable across concurrent requests.
pub trait ImageProcessor: Send + Sync {
    /// Opens and decodes a catalog entry, detecting its codec from content.
    fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError>;

    /// Transforms `source` to the target size and re-encodes it with the
    /// codec the source was decoded with.
    fn render_same_format(
        &self,
        source: &DecodedImage,
        target: DimensionRequest,
        mode: FitMode,
    ) -> Result<EncodedImage, PipelineError>;
}
