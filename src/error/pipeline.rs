use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the random image pipeline.
///
/// Catalog variants are startup-only: a process that gets one must not start
/// serving. Every other variant is scoped to a single request and never
/// touches shared state.
///
/// # Example
/// ```
/// use randpic_web::error::pipeline::PipelineError;
///
/// let err = PipelineError::InvalidDimensions {
///     min: 10,
///     max_width: 1920,
///     max_height: 1080,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Dimensions must be between 10x10 and 1920x1080"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The catalog walk finished but found no eligible image.
    #[error("no images found in {}", .root.display())]
    CatalogEmpty { root: PathBuf },

    /// The catalog root could not be walked.
    #[error("failed to load images from {}: {source}", .root.display())]
    CatalogInitFailure {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The picked file could not be opened or decoded.
    #[error("failed to load image {}: {source}", .path.display())]
    SourceReadFailure {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An explicitly requested width or height is outside the bounds.
    #[error("Dimensions must be between {min}x{min} and {max_width}x{max_height}")]
    InvalidDimensions {
        min: u32,
        max_width: u32,
        max_height: u32,
    },

    /// The decoded source is neither JPEG nor PNG.
    #[error("Unsupported image format")]
    UnsupportedFormat,

    /// The codec rejected the transformed raster.
    #[error("{codec} encoding failed: {source}")]
    EncodeFailure {
        codec: &'static str,
        #[source]
        source: image::ImageError,
    },
}

impl PipelineError {
    /// Returns `true` for errors that can only happen while building the catalog.
    pub fn is_startup(&self) -> bool {
        matches!(
            self,
            PipelineError::CatalogEmpty { .. } | PipelineError::CatalogInitFailure { .. }
        )
    }

    /// Returns `true` when the same request, retried, will likely succeed.
    ///
    /// Only a failed source read qualifies: a retry picks a new random file.
    pub fn is_retryable(&self) -> bool {
        matches!(self, PipelineError::SourceReadFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_failure() -> PipelineError {
        PipelineError::SourceReadFailure {
            path: PathBuf::from("images/broken.jpg"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "gone",
            )),
        }
    }

    #[test]
    fn invalid_dimensions_message_names_bounds() {
        let err = PipelineError::InvalidDimensions {
            min: 10,
            max_width: 1920,
            max_height: 1080,
        };
        assert_eq!(
            err.to_string(),
            "Dimensions must be between 10x10 and 1920x1080"
        );
    }

    #[test]
    fn catalog_empty_mentions_root() {
        let err = PipelineError::CatalogEmpty {
            root: PathBuf::from("./images"),
        };
        assert!(err.to_string().contains("./images"));
        assert!(err.is_startup());
        assert!(!err.is_retryable());
    }

    #[test]
    fn source_read_failure_is_retryable_and_keeps_path() {
        let err = read_failure();
        assert!(err.is_retryable());
        assert!(!err.is_startup());
        assert!(err.to_string().contains("images/broken.jpg"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unsupported_format_is_neither_startup_nor_retryable() {
        let err = PipelineError::UnsupportedFormat;
        assert!(!err.is_startup());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Unsupported image format");
    }
}
