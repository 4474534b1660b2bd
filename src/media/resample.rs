// SPDX-License-Identifier: MPL-2.0
//! Adaptive resampling: strategy selection by pixel-count thresholds and
//! execution via the `image` crate.
//!
//! Quality resampling cost grows with destination pixel count more than
//! with source size, so large-source/large-destination combinations take
//! the fast path where filter artifacts are least perceptible during
//! interaction, and the quality filter is reserved for the cases cheap
//! enough to afford it.

use crate::config::{
    DOWNSCALE_FAST_DEST_MEGAPIXELS, DOWNSCALE_LARGE_SOURCE_MEGAPIXELS,
    DOWNSCALE_SMOOTH_DEST_MEGAPIXELS, UPSCALE_LARGE_SOURCE_MEGAPIXELS,
};
use crate::domain::error::ViewportError;
use crate::domain::scale::megapixels;
use crate::media::ImageData;
use image_rs::imageops::{self, FilterType};

/// How the displayed raster is produced from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResampleStrategy {
    /// Scale is exactly 1.0; the source raster is reused as-is.
    DirectCopy,
    /// Cheap filter, optionally with smoothing.
    Fast { smooth: bool },
    /// High-quality resampling filter.
    Quality,
}

impl ResampleStrategy {
    /// Picks a strategy for the given scale and source/target sizes.
    #[must_use]
    pub fn select(scale: f32, source: (u32, u32), target: (u32, u32)) -> Self {
        if (scale - 1.0).abs() <= f32::EPSILON {
            return ResampleStrategy::DirectCopy;
        }

        let source_megapixels = megapixels(source.0, source.1);
        if scale < 1.0 {
            let target_megapixels = megapixels(target.0, target.1);
            if source_megapixels > DOWNSCALE_LARGE_SOURCE_MEGAPIXELS {
                if target_megapixels > DOWNSCALE_FAST_DEST_MEGAPIXELS {
                    ResampleStrategy::Fast { smooth: false }
                } else if target_megapixels > DOWNSCALE_SMOOTH_DEST_MEGAPIXELS {
                    ResampleStrategy::Fast { smooth: true }
                } else {
                    ResampleStrategy::Quality
                }
            } else {
                ResampleStrategy::Quality
            }
        } else if source_megapixels > UPSCALE_LARGE_SOURCE_MEGAPIXELS {
            ResampleStrategy::Fast { smooth: false }
        } else {
            ResampleStrategy::Fast { smooth: true }
        }
    }

    /// The `image` crate filter backing this strategy, if any.
    #[must_use]
    pub fn filter(self) -> Option<FilterType> {
        match self {
            ResampleStrategy::DirectCopy => None,
            ResampleStrategy::Fast { smooth: false } => Some(FilterType::Nearest),
            ResampleStrategy::Fast { smooth: true } => Some(FilterType::Triangle),
            ResampleStrategy::Quality => Some(FilterType::Lanczos3),
        }
    }

    /// Short name for diagnostics output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ResampleStrategy::DirectCopy => "direct-copy",
            ResampleStrategy::Fast { smooth: false } => "fast",
            ResampleStrategy::Fast { smooth: true } => "fast-smooth",
            ResampleStrategy::Quality => "quality",
        }
    }
}

/// Produces the raster to display at the given target size.
///
/// # Errors
///
/// [`ViewportError::SourceUnavailable`] when the source pixels cannot be
/// read back (byte length no longer matches the reported dimensions).
pub fn resample(
    source: &ImageData,
    target_width: u32,
    target_height: u32,
    strategy: ResampleStrategy,
) -> Result<ImageData, ViewportError> {
    let Some(filter) = strategy.filter() else {
        return Ok(source.clone());
    };

    let pixels =
        image_rs::RgbaImage::from_raw(source.width, source.height, source.rgba_bytes().to_vec())
            .ok_or(ViewportError::SourceUnavailable)?;

    let target_width = target_width.max(1);
    let target_height = target_height.max(1);
    let resized = imageops::resize(&pixels, target_width, target_height, filter);
    Ok(ImageData::from_rgba(
        target_width,
        target_height,
        resized.into_raw(),
    ))
}
