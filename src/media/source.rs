// SPDX-License-Identifier: MPL-2.0
//! The source image wrapper: dimensions, content kind, and the current
//! frame raster.
//!
//! Decode state stays with the external loader. The engine only reads
//! dimensions and asks for the current frame; the whole value is replaced
//! on every "display new image" call.

use crate::domain::error::ViewportError;
use crate::domain::media::MediaKind;
use crate::media::ImageData;

/// A loaded source image as seen by the viewport engine.
#[derive(Debug, Clone)]
pub struct SourceImage {
    kind: MediaKind,
    data: Option<ImageData>,
}

impl SourceImage {
    /// Wraps a still raster.
    ///
    /// # Errors
    ///
    /// [`ViewportError::InvalidImageDimensions`] when either dimension is zero.
    pub fn still(data: ImageData) -> Result<Self, ViewportError> {
        Self::displayable(MediaKind::Static, data)
    }

    /// Wraps the first frame of an animated image. Subsequent frames are
    /// pushed in by the animation driver.
    ///
    /// # Errors
    ///
    /// [`ViewportError::InvalidImageDimensions`] when either dimension is zero.
    pub fn animated(first_frame: ImageData) -> Result<Self, ViewportError> {
        Self::displayable(MediaKind::Animated, first_frame)
    }

    fn displayable(kind: MediaKind, data: ImageData) -> Result<Self, ViewportError> {
        if data.width == 0 || data.height == 0 {
            return Err(ViewportError::InvalidImageDimensions {
                width: data.width,
                height: data.height,
            });
        }
        Ok(Self {
            kind,
            data: Some(data),
        })
    }

    /// An empty source (nothing decoded).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            kind: MediaKind::None,
            data: None,
        }
    }

    /// A source whose decode failed; the painter shows the error raster.
    #[must_use]
    pub fn decode_error() -> Self {
        Self {
            kind: MediaKind::Error,
            data: None,
        }
    }

    /// Content kind of this source.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Natural dimensions, when the source carries pixels.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.data.as_ref().map(ImageData::dimensions)
    }

    /// The raster of the current frame, when the source carries pixels.
    #[must_use]
    pub fn current_frame(&self) -> Option<&ImageData> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image as solid;

    #[test]
    fn still_source_reports_kind_and_dimensions() {
        let source = SourceImage::still(solid(8, 6)).unwrap();
        assert_eq!(source.kind(), MediaKind::Static);
        assert_eq!(source.dimensions(), Some((8, 6)));
        assert!(source.current_frame().is_some());
    }

    #[test]
    fn zero_sized_raster_is_rejected() {
        let err = SourceImage::still(ImageData::from_rgba(0, 6, Vec::new())).unwrap_err();
        assert_eq!(
            err,
            ViewportError::InvalidImageDimensions {
                width: 0,
                height: 6
            }
        );
    }

    #[test]
    fn empty_and_error_sources_carry_no_pixels() {
        assert_eq!(SourceImage::empty().kind(), MediaKind::None);
        assert_eq!(SourceImage::decode_error().kind(), MediaKind::Error);
        assert!(SourceImage::empty().dimensions().is_none());
        assert!(SourceImage::decode_error().current_frame().is_none());
    }
}
