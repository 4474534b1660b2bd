// SPDX-License-Identifier: MPL-2.0
//! Drag state management.
//!
//! Bookkeeping for the two pointer gestures the engine understands:
//! grab-and-drag panning and vertical drag-zoom. Both track incremental
//! deltas between events; the geometry itself lives in
//! [`ViewportState`](super::ViewportState).

use iced::{Point, Vector};

/// Manages grab-and-drag panning state.
#[derive(Debug, Clone, Default)]
pub struct PanState {
    /// Whether a pan gesture is currently held.
    pub is_panning: bool,

    /// Pointer position at the previous gesture event.
    last_position: Option<Point>,
}

impl PanState {
    /// Starts a pan gesture.
    pub fn start(&mut self, position: Point) {
        self.is_panning = true;
        self.last_position = Some(position);
    }

    /// Stops the pan gesture.
    pub fn stop(&mut self) {
        self.is_panning = false;
        self.last_position = None;
    }

    /// Returns the delta since the previous event and advances the
    /// tracking position. `None` when no gesture is held.
    #[must_use]
    pub fn update(&mut self, current: Point) -> Option<Vector> {
        if !self.is_panning {
            return None;
        }
        let last = self.last_position?;
        self.last_position = Some(current);
        Some(Vector::new(current.x - last.x, current.y - last.y))
    }
}

/// Manages vertical drag-zoom state.
///
/// The anchor is fixed at the gesture start so the zoom keeps the same
/// image point under the pointer for the whole gesture.
#[derive(Debug, Clone, Default)]
pub struct DragZoomState {
    /// Whether a drag-zoom gesture is currently held.
    pub is_zooming: bool,

    anchor: Option<Point>,
    last_y: Option<f32>,
}

impl DragZoomState {
    /// Starts a drag-zoom gesture anchored at `position`.
    pub fn start(&mut self, position: Point) {
        self.is_zooming = true;
        self.anchor = Some(position);
        self.last_y = Some(position.y);
    }

    /// Stops the drag-zoom gesture.
    pub fn stop(&mut self) {
        self.is_zooming = false;
        self.anchor = None;
        self.last_y = None;
    }

    /// The anchor recorded at gesture start.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns the vertical distance moved since the previous event
    /// (positive = upward) and advances the tracking position. `None` when
    /// no gesture is held.
    #[must_use]
    pub fn update(&mut self, current_y: f32) -> Option<f32> {
        if !self.is_zooming {
            return None;
        }
        let last = self.last_y?;
        self.last_y = Some(current_y);
        Some(last - current_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_pan_state_is_inactive() {
        let mut state = PanState::default();
        assert!(!state.is_panning);
        assert!(state.update(Point::new(10.0, 10.0)).is_none());
    }

    #[test]
    fn pan_tracks_incremental_deltas() {
        let mut state = PanState::default();
        state.start(Point::new(100.0, 100.0));

        let delta = state.update(Point::new(110.0, 95.0)).unwrap();
        assert_abs_diff_eq!(delta.x, 10.0);
        assert_abs_diff_eq!(delta.y, -5.0);

        // Next delta is relative to the previous event, not the start
        let delta = state.update(Point::new(115.0, 95.0)).unwrap();
        assert_abs_diff_eq!(delta.x, 5.0);
        assert_abs_diff_eq!(delta.y, 0.0);
    }

    #[test]
    fn stop_clears_pan_tracking() {
        let mut state = PanState::default();
        state.start(Point::new(0.0, 0.0));
        state.stop();
        assert!(!state.is_panning);
        assert!(state.update(Point::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn drag_zoom_keeps_the_start_anchor() {
        let mut state = DragZoomState::default();
        state.start(Point::new(320.0, 240.0));

        state.update(200.0);
        state.update(180.0);
        assert_eq!(state.anchor(), Some(Point::new(320.0, 240.0)));
    }

    #[test]
    fn drag_zoom_upward_movement_is_positive() {
        let mut state = DragZoomState::default();
        state.start(Point::new(0.0, 240.0));

        assert_abs_diff_eq!(state.update(220.0).unwrap(), 20.0);
        assert_abs_diff_eq!(state.update(250.0).unwrap(), -30.0);
    }

    #[test]
    fn drag_zoom_inactive_returns_none() {
        let mut state = DragZoomState::default();
        assert!(state.update(100.0).is_none());
        state.start(Point::new(0.0, 0.0));
        state.stop();
        assert!(state.update(100.0).is_none());
        assert!(state.anchor().is_none());
    }
}
