// SPDX-License-Identifier: MPL-2.0
//! Typed diagnostic events emitted by the viewer.

use std::time::{Duration, SystemTime};

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A displayable image was accepted.
    ImageDisplayed {
        width: u32,
        height: u32,
        animated: bool,
    },
    /// The painter was switched to the designated error raster.
    ErrorRasterShown,
    /// The scale changed and a resample was scheduled.
    ScaleChanged {
        scale: f32,
        fit_mode: &'static str,
    },
    /// A settled resample produced a new displayed raster.
    ResampleCompleted {
        strategy: &'static str,
        target_width: u32,
        target_height: u32,
        duration: Duration,
    },
    /// A settled resample was dropped; the displayed raster stays stale.
    ResampleDropped {
        reason: String,
    },
}

/// One collected event with its wall-clock timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub timestamp: SystemTime,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Stamps an event with the current time.
    #[must_use]
    pub fn now(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: SystemTime::now(),
            kind,
        }
    }
}
