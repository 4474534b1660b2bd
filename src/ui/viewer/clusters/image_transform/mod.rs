// SPDX-License-Identifier: MPL-2.0
//! Image transformation cluster - zoom and pan managed together.
//!
//! This cluster groups the scale and position gestures that have strong
//! internal coupling (a drag-zoom release affects both the fit policy and
//! the resample schedule). The geometry itself lives on
//! [`ViewportState`]; the cluster translates gesture messages into
//! viewport transitions and reports what kind of follow-up the
//! orchestrator owes: nothing, a repaint, or a debounced resample.

use crate::config::DRAG_ZOOM_DISTANCE_DIVISOR;
use crate::domain::scale::ScaleStep;
use crate::ui::state::{DragZoomState, FitMode, PanState, ViewportState};
use crate::ui::viewer::scheduler::SettleDelay;
use iced::Point;

/// Pointer button reported with a double-click intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
}

/// Image transformation cluster state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Scale change per zoom in/out step (guaranteed valid by type).
    pub scale_step: ScaleStep,

    /// Pan gesture tracking.
    pub pan: PanState,

    /// Drag-zoom gesture tracking.
    pub drag_zoom: DragZoomState,
}

/// Messages for the image transformation cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one step, anchored on the viewport center.
    ZoomIn,
    /// Zoom out by one step, anchored on the viewport center.
    ZoomOut,
    /// Zoom by `delta` steps (wheel notches), anchored at `position`.
    ZoomGestureAt { position: Point, delta: f32 },
    /// Start a pan gesture.
    BeginDrag(Point),
    /// Continue a pan gesture.
    DragTo(Point),
    /// End the pan gesture.
    EndDrag,
    /// Start a drag-zoom gesture; the anchor is fixed here.
    BeginDragZoom(Point),
    /// Continue a drag-zoom gesture.
    DragZoomTo(Point),
    /// End the drag-zoom gesture.
    EndDragZoom,
    /// Double-click intent from the input layer.
    DoubleClick(PointerButton),
}

/// Effects produced by image transformation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The rectangle moved without a scale change; repaint only.
    RectChanged,
    /// The scale changed; a resample should be scheduled with this delay.
    ScaleChanged {
        delay: SettleDelay,
    },
    DoubleClicked,
    RightDoubleClicked,
}

impl State {
    /// Handle a cluster message against the shared viewport state.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message, viewport: &mut ViewportState) -> Effect {
        match msg {
            Message::ZoomIn => self.step_zoom(viewport, 1.0),
            Message::ZoomOut => self.step_zoom(viewport, -1.0),
            Message::ZoomGestureAt { position, delta } => {
                self.zoom_gesture_at(viewport, position, delta)
            }

            Message::BeginDrag(position) => {
                if viewport.has_image() {
                    self.pan.start(position);
                }
                Effect::None
            }
            Message::DragTo(position) => match self.pan.update(position) {
                Some(delta) => {
                    viewport.pan_by(delta);
                    Effect::RectChanged
                }
                None => Effect::None,
            },
            Message::EndDrag => {
                self.pan.stop();
                Effect::None
            }

            Message::BeginDragZoom(position) => {
                if viewport.has_image() {
                    self.drag_zoom.start(position);
                }
                Effect::None
            }
            Message::DragZoomTo(position) => self.drag_zoom_to(viewport, position),
            Message::EndDragZoom => {
                self.drag_zoom.stop();
                // Releasing the gesture confirms the zoom: outside fit-all
                // the fit policy re-runs and the resample fires right away.
                if viewport.has_image() && viewport.fit_mode() != FitMode::FitAll {
                    viewport.fit_default();
                    Effect::ScaleChanged {
                        delay: SettleDelay::Immediate,
                    }
                } else {
                    Effect::None
                }
            }

            Message::DoubleClick(PointerButton::Left) => Effect::DoubleClicked,
            Message::DoubleClick(PointerButton::Right) => Effect::RightDoubleClicked,
        }
    }

    /// Incremental zoom around the viewport center.
    ///
    /// A step whose clamped result equals the current scale is a no-op, so
    /// the fit mode is not disturbed at the bounds.
    fn step_zoom(&mut self, viewport: &mut ViewportState, direction: f32) -> Effect {
        if !viewport.has_image() {
            return Effect::None;
        }
        let requested = viewport.scale() + direction * self.scale_step.value();
        let clamped = viewport.bounds().clamp(requested);
        if (clamped - viewport.scale()).abs() <= f32::EPSILON {
            return Effect::None;
        }

        viewport.set_fit_mode(FitMode::Free);
        viewport.scale_around(viewport.viewport_center(), clamped);
        Effect::ScaleChanged {
            delay: SettleDelay::StepZoom,
        }
    }

    /// One-shot zoom gesture (wheel) anchored at the pointer.
    fn zoom_gesture_at(
        &mut self,
        viewport: &mut ViewportState,
        position: Point,
        delta: f32,
    ) -> Effect {
        if !viewport.has_image() {
            return Effect::None;
        }
        let requested = viewport.scale() + delta * self.scale_step.value();
        let clamped = viewport.bounds().clamp(requested);
        if (clamped - viewport.scale()).abs() <= f32::EPSILON {
            return Effect::None;
        }

        viewport.set_fit_mode(FitMode::Free);
        viewport.scale_around(position, clamped);
        Effect::ScaleChanged {
            delay: SettleDelay::StepZoom,
        }
    }

    /// Continuous drag-zoom: vertical distance maps to a scale delta
    /// spanning the legal range over the gesture distance divisor.
    ///
    /// The clamped value is always applied; a gesture step that clamps to
    /// the current scale becomes a no-op, which is what stops the gesture
    /// at a bound.
    fn drag_zoom_to(&mut self, viewport: &mut ViewportState, position: Point) -> Effect {
        let Some(moved) = self.drag_zoom.update(position.y) else {
            return Effect::None;
        };
        let Some(anchor) = self.drag_zoom.anchor() else {
            return Effect::None;
        };

        let bounds = viewport.bounds();
        let step = (bounds.max_scale() - bounds.min_scale()) / DRAG_ZOOM_DISTANCE_DIVISOR;
        let requested = viewport.scale() + step * moved;
        let clamped = bounds.clamp(requested);
        if (clamped - viewport.scale()).abs() <= f32::EPSILON {
            return Effect::None;
        }

        viewport.set_fit_mode(FitMode::Free);
        viewport.scale_around(anchor, clamped);
        Effect::ScaleChanged {
            delay: SettleDelay::DragZoom,
        }
    }
}
