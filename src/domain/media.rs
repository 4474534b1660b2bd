// SPDX-License-Identifier: MPL-2.0
//! Media content kinds understood by the viewer.

/// Content kind of a source image.
///
/// The viewer never owns decode state; it only needs to know whether the
/// source carries displayable pixels and whether frames keep arriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaKind {
    /// Nothing decoded yet (empty or unrecognized file).
    #[default]
    None,
    /// A single still raster.
    Static,
    /// An animated image; frames are pushed in by the animation driver.
    Animated,
    /// Decoding failed; the painter shows the designated error raster.
    Error,
}

impl MediaKind {
    /// Whether this kind carries displayable pixels.
    #[must_use]
    pub fn is_displayable(self) -> bool {
        matches!(self, MediaKind::Static | MediaKind::Animated)
    }

    /// Whether frames keep arriving from the animation driver.
    #[must_use]
    pub fn is_animated(self) -> bool {
        self == MediaKind::Animated
    }
}
