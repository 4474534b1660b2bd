// SPDX-License-Identifier: MPL-2.0
//! Domain error types for viewport and resample operations.
//!
//! None of these are fatal to the viewer: each degrades to "keep the last
//! known good visual state" and surfaces a flag the painter can check.

use std::fmt;

/// Errors raised by the viewport engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// Source image has a zero-sized dimension. Fatal for that image; the
    /// viewer falls back to the error-display state.
    InvalidImageDimensions {
        /// Reported source width in pixels.
        width: u32,
        /// Reported source height in pixels.
        height: u32,
    },

    /// The source raster could not be read when a resample settled
    /// (e.g. freed concurrently). Recoverable; the request is dropped and
    /// the displayed raster stays stale.
    SourceUnavailable,

    /// Viewport has a zero-sized dimension. Fit computations skip and the
    /// geometry holds the last good rectangle.
    DegenerateViewport,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::InvalidImageDimensions { width, height } => {
                write!(f, "invalid image dimensions: {width}x{height}")
            }
            ViewportError::SourceUnavailable => {
                write!(f, "source raster unavailable for resampling")
            }
            ViewportError::DegenerateViewport => {
                write!(f, "viewport has a zero-sized dimension")
            }
        }
    }
}

impl std::error::Error for ViewportError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_dimensions() {
        let err = ViewportError::InvalidImageDimensions {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "invalid image dimensions: 0x600");
    }

    #[test]
    fn variants_compare_by_value() {
        assert_eq!(
            ViewportError::SourceUnavailable,
            ViewportError::SourceUnavailable
        );
        assert_ne!(
            ViewportError::SourceUnavailable,
            ViewportError::DegenerateViewport
        );
    }
}
