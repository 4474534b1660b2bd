// SPDX-License-Identifier: MPL-2.0
//! Media lifecycle cluster - source holding, animation frames, and the
//! error-display state managed together.
//!
//! The cluster owns the current [`SourceImage`] and the flag telling the
//! painter to show the designated error raster. Cross-cutting interactions
//! (a successful display clearing a previous error, animation frames being
//! accepted only while an animated source is up) are handled here, not by
//! the orchestrator.
//!
//! Decode failures surface before this cluster: a loader that cannot build
//! a valid [`SourceImage`] hands in [`SourceImage::decode_error`], which
//! lands in the same error-display state as an empty source.

use crate::domain::media::MediaKind;
use crate::media::{ImageData, SourceImage};

/// Media lifecycle cluster state.
#[derive(Debug, Clone, Default)]
pub struct State {
    source: Option<SourceImage>,
    error: bool,
}

/// Messages for the media lifecycle cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// Display a newly loaded source, replacing the current one wholesale.
    Display(SourceImage),
    /// A new frame arrived from the animation driver.
    AnimationFrame(ImageData),
    /// Clear all media state.
    Clear,
}

/// Effects produced by media lifecycle operations.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A displayable image was accepted; the orchestrator resets geometry.
    ImageAccepted {
        width: u32,
        height: u32,
        animated: bool,
    },
    /// The source carries no pixels; the painter shows the error raster.
    ShowErrorRaster,
    /// A pre-sized animation frame to swap in without resampling.
    FrameReady(ImageData),
    /// Media was cleared.
    Cleared,
}

impl State {
    /// Handle a cluster message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Display(source) => {
                let kind = source.kind();
                let dimensions = source.dimensions();
                self.source = Some(source);

                match (kind.is_displayable(), dimensions) {
                    (true, Some((width, height))) => {
                        self.error = false;
                        Effect::ImageAccepted {
                            width,
                            height,
                            animated: kind.is_animated(),
                        }
                    }
                    _ => {
                        self.error = true;
                        Effect::ShowErrorRaster
                    }
                }
            }
            Message::AnimationFrame(frame) => {
                if self.kind().is_animated() {
                    Effect::FrameReady(frame)
                } else {
                    Effect::None
                }
            }
            Message::Clear => {
                self.source = None;
                self.error = false;
                Effect::Cleared
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Whether a displayable source is up.
    #[must_use]
    pub fn is_displaying(&self) -> bool {
        self.kind().is_displayable()
    }

    /// Whether the painter should show the error raster.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Content kind of the current source.
    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.source.as_ref().map_or(MediaKind::None, SourceImage::kind)
    }

    /// The current source, if any.
    #[must_use]
    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image as solid;

    #[test]
    fn displaying_a_still_image_is_accepted() {
        let mut state = State::default();
        let effect = state.handle(Message::Display(
            SourceImage::still(solid(8, 6)).unwrap(),
        ));

        assert!(matches!(
            effect,
            Effect::ImageAccepted {
                width: 8,
                height: 6,
                animated: false
            }
        ));
        assert!(state.is_displaying());
        assert!(!state.has_error());
    }

    #[test]
    fn displaying_an_undecodable_source_shows_the_error_raster() {
        let mut state = State::default();
        let effect = state.handle(Message::Display(SourceImage::decode_error()));

        assert!(matches!(effect, Effect::ShowErrorRaster));
        assert!(!state.is_displaying());
        assert!(state.has_error());
    }

    #[test]
    fn a_good_display_clears_a_previous_error() {
        let mut state = State::default();
        state.handle(Message::Display(SourceImage::decode_error()));
        assert!(state.has_error());

        state.handle(Message::Display(
            SourceImage::still(solid(8, 6)).unwrap(),
        ));
        assert!(!state.has_error());
    }

    #[test]
    fn animation_frames_pass_through_only_while_animated() {
        let mut state = State::default();
        // No source: frames are ignored
        assert!(matches!(
            state.handle(Message::AnimationFrame(solid(8, 6))),
            Effect::None
        ));

        state.handle(Message::Display(
            SourceImage::animated(solid(8, 6)).unwrap(),
        ));
        assert!(matches!(
            state.handle(Message::AnimationFrame(solid(8, 6))),
            Effect::FrameReady(_)
        ));

        // A still image stops the frame stream
        state.handle(Message::Display(
            SourceImage::still(solid(8, 6)).unwrap(),
        ));
        assert!(matches!(
            state.handle(Message::AnimationFrame(solid(8, 6))),
            Effect::None
        ));
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = State::default();
        state.handle(Message::Display(
            SourceImage::still(solid(8, 6)).unwrap(),
        ));

        let effect = state.handle(Message::Clear);
        assert!(matches!(effect, Effect::Cleared));
        assert!(!state.is_displaying());
        assert!(state.source().is_none());
        assert_eq!(state.kind(), MediaKind::None);
    }
}
