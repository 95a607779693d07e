//! # Requested Dimensions
//!
//! Defines the caller's requested output size and the bounds it is checked
//! against before any decode or transform work happens.
//!
//! - [`DimensionRequest`] — a `(width, height)` pair where either side may be
//!   unspecified.
//! - [`DimensionBounds`] — the inclusive `[min, max_width] x [min, max_height]` range.
//!
//! # Example
//! ```rust
//! use randpic_web::image::dimensions::{DimensionBounds, DimensionRequest};
//!
//! let bounds = DimensionBounds::default();
//! assert!(bounds.validate(800, 600));
//! assert!(!bounds.validate(1921, 1080));
//!
//! let req = DimensionRequest::new(800, 0);
//! assert!(bounds.check(&req).is_ok());
//! assert_eq!(req.resolve((1000, 500)), (800, 500));
//! ```

use crate::error::pipeline::PipelineError;

/// Smallest accepted width or height.
pub const MIN_SIZE: u32 = 10;
/// Largest accepted width.
pub const MAX_WIDTH: u32 = 1920;
/// Largest accepted height.
pub const MAX_HEIGHT: u32 = 1080;

/// Requested output size.
///
/// `None` means "unspecified": the side is filled in from the source image's
/// natural size once it has been decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DimensionRequest {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl DimensionRequest {
    /// Builds a request from raw values, treating `0` as unspecified.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: (width > 0).then_some(width),
            height: (height > 0).then_some(height),
        }
    }

    /// A request that keeps the source at its natural size.
    pub fn natural() -> Self {
        Self::default()
    }

    /// Returns `true` when neither side was given.
    pub fn is_unspecified(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }

    /// Fills unspecified sides from the source's natural `(width, height)`.
    pub fn resolve(&self, natural: (u32, u32)) -> (u32, u32) {
        (
            self.width.unwrap_or(natural.0),
            self.height.unwrap_or(natural.1),
        )
    }
}

/// Inclusive bounds for requested dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionBounds {
    pub min_size: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for DimensionBounds {
    fn default() -> Self {
        Self {
            min_size: MIN_SIZE,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        }
    }
}

impl DimensionBounds {
    pub fn new(min_size: u32, max_width: u32, max_height: u32) -> Self {
        Self {
            min_size,
            max_width,
            max_height,
        }
    }

    /// Pure predicate: both sides must independently lie within the bounds.
    pub fn validate(&self, width: u32, height: u32) -> bool {
        self.width_ok(width) && self.height_ok(height)
    }

    /// Checks only the sides the caller actually supplied.
    ///
    /// Unspecified sides are skipped here; they are resolved from the source
    /// image later and only checked again when the service asks for it.
    pub fn check(&self, req: &DimensionRequest) -> Result<(), PipelineError> {
        let width_ok = req.width.is_none_or(|w| self.width_ok(w));
        let height_ok = req.height.is_none_or(|h| self.height_ok(h));
        if width_ok && height_ok {
            Ok(())
        } else {
            Err(self.out_of_bounds())
        }
    }

    /// Checks a fully resolved size.
    pub fn check_resolved(&self, width: u32, height: u32) -> Result<(), PipelineError> {
        if self.validate(width, height) {
            Ok(())
        } else {
            Err(self.out_of_bounds())
        }
    }

    fn width_ok(&self, width: u32) -> bool {
        width >= self.min_size && width <= self.max_width
    }

    fn height_ok(&self, height: u32) -> bool {
        height >= self.min_size && height <= self.max_height
    }

    /// The error reported for any size outside these bounds.
    pub fn out_of_bounds(&self) -> PipelineError {
        PipelineError::InvalidDimensions {
            min: self.min_size,
            max_width: self.max_width,
            max_height: self.max_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_boundaries() {
        let b = DimensionBounds::default();
        assert!(b.validate(10, 10));
        assert!(!b.validate(9, 10));
        assert!(!b.validate(10, 9));
        assert!(b.validate(1920, 1080));
        assert!(!b.validate(1921, 1080));
        assert!(!b.validate(1920, 1081));
    }

    #[test]
    fn validate_has_no_aspect_constraint() {
        let b = DimensionBounds::default();
        assert!(b.validate(1920, 10));
        assert!(b.validate(10, 1080));
    }

    #[test]
    fn validate_is_pure() {
        let b = DimensionBounds::default();
        for (w, h) in [(10, 10), (9, 10), (500, 2000)] {
            assert_eq!(b.validate(w, h), b.validate(w, h));
        }
    }

    #[test]
    fn zero_means_unspecified() {
        let req = DimensionRequest::new(0, 600);
        assert_eq!(req.width, None);
        assert_eq!(req.height, Some(600));
        assert!(DimensionRequest::new(0, 0).is_unspecified());
        assert_eq!(DimensionRequest::new(0, 0), DimensionRequest::natural());
    }

    #[test]
    fn check_skips_unspecified_side() {
        let b = DimensionBounds::default();
        assert!(b.check(&DimensionRequest::new(800, 0)).is_ok());
        assert!(b.check(&DimensionRequest::new(0, 600)).is_ok());
        assert!(b.check(&DimensionRequest::natural()).is_ok());
    }

    #[test]
    fn check_rejects_explicit_out_of_bounds() {
        let b = DimensionBounds::default();
        let err = b.check(&DimensionRequest::new(5000, 0)).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidDimensions { .. }));
        assert!(b.check(&DimensionRequest::new(800, 9)).is_err());
    }

    #[test]
    fn resolve_fills_from_natural_size() {
        assert_eq!(DimensionRequest::new(0, 0).resolve((1000, 500)), (1000, 500));
        assert_eq!(DimensionRequest::new(300, 0).resolve((1000, 500)), (300, 500));
        assert_eq!(DimensionRequest::new(0, 40).resolve((1000, 500)), (1000, 40));
        assert_eq!(DimensionRequest::new(30, 40).resolve((1000, 500)), (30, 40));
    }

    #[test]
    fn check_resolved_applies_full_bounds() {
        let b = DimensionBounds::default();
        assert!(b.check_resolved(800, 600).is_ok());
        assert!(b.check_resolved(4000, 600).is_err());
    }

    #[test]
    fn custom_bounds() {
        let b = DimensionBounds::new(1, 100, 50);
        assert!(b.validate(1, 1));
        assert!(b.validate(100, 50));
        assert!(!b.validate(101, 50));
    }
}
