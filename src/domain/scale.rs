// SPDX-License-Identifier: MPL-2.0
//! Scale value objects: the legal zoom range and the zoom step.
//!
//! Naming follows the viewer convention: `min_scale` is the most-zoomed-in
//! (numerically largest) scale the user may reach, because it is derived
//! from a minimum-pixel-budget rule; `max_scale` is the most-zoomed-out
//! scale at which the image still fits the viewport. `max_scale <=
//! min_scale` holds for every constructed value.

use crate::config::{
    DEFAULT_SCALE_STEP, MAX_SCALE_STEP, MIN_SCALE_BASELINE, MIN_SCALE_STEP,
    PIXEL_BUDGET_MEGAPIXELS,
};
use crate::domain::error::ViewportError;

/// Converts pixel dimensions to megapixels.
#[must_use]
pub fn megapixels(width: u32, height: u32) -> f32 {
    width as f32 * height as f32 / 1_000_000.0
}

/// The legal zoom range for one (image, viewport) pairing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    max_scale: f32,
    min_scale: f32,
}

impl ScaleBounds {
    /// Computes the zoom range from image and viewport dimensions.
    ///
    /// The most-zoomed-out scale is `1.0` when the image is already smaller
    /// than the viewport on both axes (never upscale to "fill"), otherwise
    /// the largest scale that still fits both dimensions. The zoom-in
    /// ceiling starts at the 3x baseline and is lowered so that the
    /// rendered raster never exceeds the 25-megapixel budget.
    ///
    /// # Errors
    ///
    /// - [`ViewportError::InvalidImageDimensions`] for a zero-sized image.
    /// - [`ViewportError::DegenerateViewport`] for a zero-sized viewport.
    pub fn compute(
        source_width: u32,
        source_height: u32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Self, ViewportError> {
        if source_width == 0 || source_height == 0 {
            return Err(ViewportError::InvalidImageDimensions {
                width: source_width,
                height: source_height,
            });
        }
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Err(ViewportError::DegenerateViewport);
        }

        let max_scale = if (source_width as f32) < viewport_width
            && (source_height as f32) < viewport_height
        {
            1.0
        } else {
            let fit_x = viewport_width / source_width as f32;
            let fit_y = viewport_height / source_height as f32;
            fit_x.min(fit_y)
        };

        let image_megapixels = megapixels(source_width, source_height);
        let mut min_scale = MIN_SCALE_BASELINE;
        if min_scale * image_megapixels > PIXEL_BUDGET_MEGAPIXELS {
            min_scale = (PIXEL_BUDGET_MEGAPIXELS / image_megapixels).sqrt();
        }

        Ok(Self {
            max_scale,
            min_scale: min_scale.max(max_scale),
        })
    }

    /// The most-zoomed-out legal scale.
    #[must_use]
    pub fn max_scale(self) -> f32 {
        self.max_scale
    }

    /// The most-zoomed-in legal scale.
    #[must_use]
    pub fn min_scale(self) -> f32 {
        self.min_scale
    }

    /// Clamps a requested scale into the legal range.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        scale.clamp(self.max_scale, self.min_scale)
    }

    /// Whether the given scale sits at (or below) the zoomed-out end.
    #[must_use]
    pub fn at_max(self, scale: f32) -> bool {
        scale <= self.max_scale + f32::EPSILON
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self {
            max_scale: 1.0,
            min_scale: MIN_SCALE_BASELINE,
        }
    }
}

/// Scale change applied by a single zoom in/out step, guaranteed to be
/// within the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleStep(f32);

impl ScaleStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        Self(step.clamp(MIN_SCALE_STEP, MAX_SCALE_STEP))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ScaleStep {
    fn default() -> Self {
        Self(DEFAULT_SCALE_STEP)
    }
}
