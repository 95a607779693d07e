//! # Format-Preserving Encoder
//!
//! Serializes a transformed raster with the codec the source was decoded
//! with. The codec choice keys off [`SourceFormat`] only, never off the
//! in-memory pixel layout, so the bytes and the MIME type always agree.
//!
//! # Example
//! ```rust
//! use image::{DynamicImage, RgbImage};
//! use randpic_web::image::encoder::{encode, SourceFormat};
//!
//! let img = DynamicImage::ImageRgb8(RgbImage::new(4, 3));
//! let out = encode(&img, SourceFormat::Png, 75).unwrap();
//! assert_eq!(out.content_type(), "image/png");
//! assert_eq!(&out.bytes[1..4], b"PNG");
//! ```

use std::io::Cursor;

use image::{
    DynamicImage, ImageFormat,
    codecs::{jpeg::JpegEncoder, png::PngEncoder},
};

use crate::error::pipeline::PipelineError;

/// Default JPEG quality, matching the common library default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// The codec a source file was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Jpeg,
    Png,
    /// Decodable, but not one of the two served codecs.
    Unknown,
}

impl SourceFormat {
    /// Maps a detected [`ImageFormat`] onto the served codecs.
    pub fn from_image_format(format: Option<ImageFormat>) -> Self {
        match format {
            Some(ImageFormat::Jpeg) => SourceFormat::Jpeg,
            Some(ImageFormat::Png) => SourceFormat::Png,
            _ => SourceFormat::Unknown,
        }
    }

    /// MIME type paired with the codec, if it is served.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            SourceFormat::Jpeg => Some("image/jpeg"),
            SourceFormat::Png => Some("image/png"),
            SourceFormat::Unknown => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.content_type().is_some()
    }
}

/// Encoded output ready to be written to a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    /// Codec actually used; always `Jpeg` or `Png`.
    pub format: SourceFormat,
}

impl EncodedImage {
    pub fn content_type(&self) -> &'static str {
        self.format
            .content_type()
            .unwrap_or("application/octet-stream")
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Encodes `image` with the codec named by `format`.
///
/// - `Jpeg` is lossy at `jpeg_quality` (clamped to `1..=100`); alpha is dropped.
/// - `Png` is lossless and keeps the raster's color type.
/// - `Unknown` fails with [`PipelineError::UnsupportedFormat`].
pub fn encode(
    image: &DynamicImage,
    format: SourceFormat,
    jpeg_quality: u8,
) -> Result<EncodedImage, PipelineError> {
    let mut out = Vec::new();
    let mut cur = Cursor::new(&mut out);

    match format {
        SourceFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut cur, jpeg_quality.clamp(1, 100));
            rgb.write_with_encoder(encoder)
                .map_err(|source| PipelineError::EncodeFailure {
                    codec: "JPEG",
                    source,
                })?;
        }
        SourceFormat::Png => {
            image
                .write_with_encoder(PngEncoder::new(&mut cur))
                .map_err(|source| PipelineError::EncodeFailure {
                    codec: "PNG",
                    source,
                })?;
        }
        SourceFormat::Unknown => return Err(PipelineError::UnsupportedFormat),
    }

    Ok(EncodedImage { bytes: out, format })
}
