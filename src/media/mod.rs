// SPDX-License-Identifier: MPL-2.0
//! Raster handling for the viewer: the display raster type, the source
//! image wrapper, and the adaptive resampling path.

pub mod image;
pub mod resample;
pub mod source;

// Re-export commonly used types
pub use image::ImageData;
pub use resample::{resample, ResampleStrategy};
pub use source::SourceImage;
