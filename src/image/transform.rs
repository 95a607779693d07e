//! # Geometric Transform
//!
//! Maps a decoded image onto the requested output size.
//!
//! Two [`FitMode`]s are supported:
//! - [`FitMode::ExactFill`] — center-crop the source to the box's aspect
//!   ratio, then scale the crop to the box. Proportions are never distorted,
//!   and no intermediate buffer is larger than the source or the box.
//! - [`FitMode::Stretch`] — scale each axis independently to the box.
//!
//! Both use a Lanczos filter. The input image is borrowed and never mutated.

use std::{fmt, str::FromStr};

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use tracing::debug;

use super::dimensions::DimensionRequest;

const FILTER: FilterType = FilterType::Lanczos3;

/// How a source is mapped onto the requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Crop-and-scale to exactly the box, keeping the source aspect ratio.
    #[default]
    ExactFill,
    /// Scale to exactly the box, distorting if the ratios differ.
    Stretch,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitMode::ExactFill => "exact-fill",
            FitMode::Stretch => "stretch",
        }
    }
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown fit mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fit mode: {0}")]
pub struct UnknownFitMode(pub String);

impl FromStr for FitMode {
    type Err = UnknownFitMode;

    /// Accepts `fill`, `exact-fill`, `crop` and `stretch`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fill" | "exact-fill" | "crop" => Ok(FitMode::ExactFill),
            "stretch" => Ok(FitMode::Stretch),
            _ => Err(UnknownFitMode(s.to_string())),
        }
    }
}

/// Produces a new image of the resolved target size.
///
/// Unspecified sides of `target` take the source's natural size. When both
/// are unspecified, or the resolved size already matches the source, the
/// result is an unchanged copy.
pub fn transform(image: &DynamicImage, target: DimensionRequest, mode: FitMode) -> DynamicImage {
    let natural = image.dimensions();
    let (w, h) = target.resolve(natural);

    if target.is_unspecified() || (w, h) == natural {
        debug!("transform skipped, keeping {}x{}", natural.0, natural.1);
        return image.clone();
    }

    debug!(
        "transform {}x{} -> {}x{} ({})",
        natural.0, natural.1, w, h, mode
    );

    match mode {
        FitMode::ExactFill => {
            let (x, y, cw, ch) = fill_crop_rect(natural, (w, h));
            image.crop_imm(x, y, cw, ch).resize_exact(w, h, FILTER)
        }
        FitMode::Stretch => image.resize_exact(w, h, FILTER),
    }
}

/// Centered `(x, y, width, height)` region of a `natural`-sized source that
/// has the aspect ratio of `target`.
///
/// The region is at least 1x1 and never exceeds the source.
fn fill_crop_rect(natural: (u32, u32), target: (u32, u32)) -> (u32, u32, u32, u32) {
    let (sw, sh) = (u64::from(natural.0), u64::from(natural.1));
    let (tw, th) = (u64::from(target.0.max(1)), u64::from(target.1.max(1)));

    if sw * th > sh * tw {
        // Source is wider than the box: keep full height, trim the sides.
        let cw = ((sh * tw * 2 + th) / (th * 2)).clamp(1, sw);
        ((sw - cw) as u32 / 2, 0, cw as u32, natural.1)
    } else {
        let ch = ((sw * th * 2 + tw) / (tw * 2)).clamp(1, sh);
        (0, (sh - ch) as u32 / 2, natural.0, ch as u32)
    }
}
