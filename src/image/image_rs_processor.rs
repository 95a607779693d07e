//! # Image Processor Implementation (image-rs)
//!
//! Provides an [`ImageProcessor`] implementation using the [`image`] crate.
//!
//! Sources are decoded with content-based format detection, so a PNG saved
//! with a `.jpg` name is still treated as PNG. Output is re-encoded with the
//! detected codec: **JPEG** and **PNG** are served, anything else that the
//! `image` crate can decode is rejected at encode time.
//!
//! # Example
//! ```rust,no_run
//! use std::path::Path;
//! use randpic_web::image::dimensions::DimensionRequest;
//! use randpic_web::image::image_rs_processor::ImageRsProcessor;
//! use randpic_web::image::processor::ImageProcessor;
//! use randpic_web::image::transform::FitMode;
//!
//! let processor = ImageRsProcessor::default();
//! let src = processor.decode(Path::new("images/cat.jpg")).unwrap();
//! let out = processor
//!     .render_same_format(&src, DimensionRequest::new(800, 600), FitMode::ExactFill)
//!     .unwrap();
//! std::fs::write("cat-800x600.jpg", &out.bytes).unwrap();
//! ```

use std::path::Path;

use image::ImageReader;

use super::{
    dimensions::DimensionRequest,
    encoder::{DEFAULT_JPEG_QUALITY, EncodedImage, SourceFormat, encode},
    processor::{DecodedImage, ImageProcessor},
    transform::{FitMode, transform},
};
use crate::error::pipeline::PipelineError;

/// A concrete implementation of [`ImageProcessor`] using the `image` crate.
#[derive(Clone, Debug)]
pub struct ImageRsProcessor {
    jpeg_quality: u8,
}

impl Default for ImageRsProcessor {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ImageRsProcessor {
    pub fn new(jpeg_quality: u8) -> Self {
        Self { jpeg_quality }
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }
}

impl ImageProcessor for ImageRsProcessor {
    fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        let read_err = |source: image::ImageError| PipelineError::SourceReadFailure {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path)
            .map_err(|e| read_err(e.into()))?
            .with_guessed_format()
            .map_err(|e| read_err(e.into()))?;
        let format = SourceFormat::from_image_format(reader.format());
        let image = reader.decode().map_err(read_err)?;

        Ok(DecodedImage::new(image, format))
    }

    fn render_same_format(
        &self,
        source: &DecodedImage,
        target: DimensionRequest,
        mode: FitMode,
    ) -> Result<EncodedImage, PipelineError> {
        if !source.format.is_supported() {
            return Err(PipelineError::UnsupportedFormat);
        }
        let resized = transform(&source.image, target, mode);
        encode(&resized, source.format, self.jpeg_quality)
    }
}
