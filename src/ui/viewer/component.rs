// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The orchestrator wires the clusters together: lifecycle messages decide
//! what is displayed, transform messages move the viewport, and every
//! scale-affecting transition funnels into one debounced resample
//! schedule. The displayed raster is an immutable value swapped atomically
//! when a settle completes, so the painter never observes a half-produced
//! frame.
//!
//! All operations run on one control thread; the only asynchronous element
//! is the settle timer, whose message carries a token checked against the
//! scheduler's generation before any work happens.

use crate::config::Config;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::scale::ScaleStep;
use crate::media::{resample, ImageData, SourceImage};
use crate::ui::state::{FitMode, ViewportState};
use crate::ui::viewer::clusters::{image_transform, media_lifecycle};
use crate::ui::viewer::scheduler::{
    ResampleRequest, ResampleScheduler, ResampleToken, SettleDelay,
};
use iced::{Point, Rectangle, Size, Task};
use std::time::Instant;

pub use crate::ui::viewer::clusters::image_transform::PointerButton;

/// Messages understood by the viewer.
#[derive(Debug, Clone)]
pub enum Message {
    /// Display a newly loaded source image, replacing the current one.
    Display(SourceImage),
    /// Clear all media state.
    Clear,
    /// Switch to normal (100%) fit.
    SelectNormal,
    /// Switch to fit-width.
    SelectWidth,
    /// Switch to fit-all.
    SelectAll,
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Zoom by `delta` steps (wheel notches), anchored at `position`.
    ZoomGestureAt { position: Point, delta: f32 },
    /// The display surface was resized.
    ViewportResized { width: f32, height: f32 },
    /// Pan gesture intents from the input layer.
    BeginDrag(Point),
    DragTo(Point),
    EndDrag,
    /// Drag-zoom gesture intents from the input layer.
    BeginDragZoom(Point),
    DragZoomTo(Point),
    EndDragZoom,
    /// Double-click intent from the input layer.
    DoubleClick(PointerButton),
    /// A new frame from the animation driver; swapped in without resampling.
    AnimationFrame(ImageData),
    /// The settle timer fired for a scheduled resample.
    ResampleSettled(ResampleToken),
}

/// Side effects the embedding application should perform after handling a
/// viewer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The displayed image changed (new source or error state).
    ImageChanged,
    DoubleClicked,
    RightDoubleClicked,
}

/// Complete viewer component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    lifecycle: media_lifecycle::State,
    transform: image_transform::State,
    viewport: ViewportState,
    scheduler: ResampleScheduler,
    displayed: Option<ImageData>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a viewer applying persisted preferences.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::default();
        if let Some(step) = config.scale_step {
            state.transform.scale_step = ScaleStep::new(step);
        }
        if let Some(mode) = config.fit_mode.as_deref().and_then(FitMode::from_name) {
            state.viewport.set_fit_mode(mode);
        }
        state
    }

    /// Attaches a diagnostics handle; events are recorded from then on.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS (the painter's read surface)
    // ═══════════════════════════════════════════════════════════════════════

    /// The rectangle to blit [`displayed_raster`](Self::displayed_raster)
    /// into, in viewport coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rectangle {
        self.viewport.visible_rect()
    }

    /// The raster to display, already resampled to the visible rectangle
    /// (or awaiting its next settle).
    #[must_use]
    pub fn displayed_raster(&self) -> Option<&ImageData> {
        self.displayed.as_ref()
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.viewport.scale()
    }

    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.viewport.fit_mode()
    }

    #[must_use]
    pub fn is_displaying(&self) -> bool {
        self.lifecycle.is_displaying()
    }

    /// Whether the painter should show the designated error raster.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.lifecycle.has_error()
    }

    /// Whether the displayed raster differs from the source size.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.viewport.is_scaled()
    }

    #[must_use]
    pub fn source(&self) -> Option<&SourceImage> {
        self.lifecycle.source()
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Token of the pending resample, for hosts that drive settles
    /// directly instead of through the returned tasks.
    #[must_use]
    pub fn pending_resample(&self) -> Option<ResampleToken> {
        self.scheduler.current_token()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UPDATE
    // ═══════════════════════════════════════════════════════════════════════

    /// Handle a viewer message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Display(source) => self.display(source),
            Message::Clear => {
                self.scheduler.cancel();
                self.lifecycle.handle(media_lifecycle::Message::Clear);
                self.viewport.clear_image();
                self.displayed = None;
                (Effect::ImageChanged, Task::none())
            }

            Message::SelectNormal => self.select_mode(FitMode::Normal),
            Message::SelectWidth => self.select_mode(FitMode::FitWidth),
            Message::SelectAll => self.select_mode(FitMode::FitAll),

            Message::ZoomIn => self.apply_transform(image_transform::Message::ZoomIn),
            Message::ZoomOut => self.apply_transform(image_transform::Message::ZoomOut),
            Message::ZoomGestureAt { position, delta } => {
                self.apply_transform(image_transform::Message::ZoomGestureAt { position, delta })
            }
            Message::BeginDrag(position) => {
                self.apply_transform(image_transform::Message::BeginDrag(position))
            }
            Message::DragTo(position) => {
                self.apply_transform(image_transform::Message::DragTo(position))
            }
            Message::EndDrag => self.apply_transform(image_transform::Message::EndDrag),
            Message::BeginDragZoom(position) => {
                self.apply_transform(image_transform::Message::BeginDragZoom(position))
            }
            Message::DragZoomTo(position) => {
                self.apply_transform(image_transform::Message::DragZoomTo(position))
            }
            Message::EndDragZoom => self.apply_transform(image_transform::Message::EndDragZoom),
            Message::DoubleClick(button) => {
                self.apply_transform(image_transform::Message::DoubleClick(button))
            }

            Message::ViewportResized { width, height } => self.viewport_resized(width, height),
            Message::AnimationFrame(frame) => {
                if let media_lifecycle::Effect::FrameReady(frame) = self
                    .lifecycle
                    .handle(media_lifecycle::Message::AnimationFrame(frame))
                {
                    self.displayed = Some(frame);
                }
                (Effect::None, Task::none())
            }
            Message::ResampleSettled(token) => {
                self.resample_settled(token);
                (Effect::None, Task::none())
            }
        }
    }

    fn display(&mut self, source: SourceImage) -> (Effect, Task<Message>) {
        // A pending resample for the outgoing image must never land
        self.scheduler.cancel();

        match self
            .lifecycle
            .handle(media_lifecycle::Message::Display(source))
        {
            media_lifecycle::Effect::ImageAccepted {
                width,
                height,
                animated,
            } => {
                self.viewport.promote_free_to_all();
                self.viewport.set_image(width, height);
                if self.viewport.update_bounds().is_ok() {
                    self.viewport.fit_default();
                }
                self.displayed = self
                    .lifecycle
                    .source()
                    .and_then(SourceImage::current_frame)
                    .cloned();
                self.record(DiagnosticEventKind::ImageDisplayed {
                    width,
                    height,
                    animated,
                });
                (Effect::ImageChanged, self.schedule_resample(SettleDelay::Immediate))
            }
            media_lifecycle::Effect::ShowErrorRaster => {
                self.viewport.clear_image();
                self.displayed = None;
                self.record(DiagnosticEventKind::ErrorRasterShown);
                (Effect::ImageChanged, Task::none())
            }
            _ => (Effect::None, Task::none()),
        }
    }

    fn select_mode(&mut self, mode: FitMode) -> (Effect, Task<Message>) {
        self.viewport.set_fit_mode(mode);
        if self.viewport.update_bounds().is_ok() {
            self.viewport.fit_default();
        }
        (Effect::None, self.schedule_resample(SettleDelay::Immediate))
    }

    fn viewport_resized(&mut self, width: f32, height: f32) -> (Effect, Task<Message>) {
        self.viewport.set_viewport_size(Size::new(width, height));
        if self.viewport.update_bounds().is_ok() {
            match self.viewport.fit_mode() {
                // Free zoom keeps its scale except for a re-clamp into the
                // new bounds; 100% keeps it outright. Only the position is
                // fixed up. The fitted modes recompute.
                FitMode::Free => {
                    let clamped = self.viewport.bounds().clamp(self.viewport.scale());
                    if (clamped - self.viewport.scale()).abs() > f32::EPSILON {
                        self.viewport.set_scale(clamped);
                    }
                    self.viewport.align();
                }
                FitMode::Normal => self.viewport.align(),
                FitMode::FitWidth | FitMode::FitAll => self.viewport.fit_default(),
            }
        }
        (Effect::None, self.schedule_resample(SettleDelay::Resize))
    }

    fn apply_transform(&mut self, message: image_transform::Message) -> (Effect, Task<Message>) {
        match self.transform.handle(message, &mut self.viewport) {
            image_transform::Effect::None | image_transform::Effect::RectChanged => {
                (Effect::None, Task::none())
            }
            image_transform::Effect::ScaleChanged { delay } => {
                (Effect::None, self.schedule_resample(delay))
            }
            image_transform::Effect::DoubleClicked => (Effect::DoubleClicked, Task::none()),
            image_transform::Effect::RightDoubleClicked => {
                (Effect::RightDoubleClicked, Task::none())
            }
        }
    }

    /// Registers the debounced resample for the current geometry and
    /// returns the task that will deliver the settle message.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn schedule_resample(&mut self, delay: SettleDelay) -> Task<Message> {
        // Animated frames arrive pre-sized; nothing to resample
        if !self.lifecycle.is_displaying() || self.lifecycle.kind().is_animated() {
            return Task::none();
        }
        let Some(source_dimensions) = self
            .lifecycle
            .source()
            .and_then(SourceImage::dimensions)
        else {
            return Task::none();
        };

        let rect = self.viewport.visible_rect();
        let request = ResampleRequest {
            target_width: rect.width.round().max(1.0) as u32,
            target_height: rect.height.round().max(1.0) as u32,
            scale: self.viewport.scale(),
            source_dimensions,
        };
        self.record(DiagnosticEventKind::ScaleChanged {
            scale: request.scale,
            fit_mode: self.viewport.fit_mode().name(),
        });

        let (token, duration) = self.scheduler.schedule(request, delay);
        if duration.is_zero() {
            Task::done(Message::ResampleSettled(token))
        } else {
            Task::perform(tokio::time::sleep(duration), move |()| {
                Message::ResampleSettled(token)
            })
        }
    }

    fn resample_settled(&mut self, token: ResampleToken) {
        let Some(request) = self.scheduler.settle(token) else {
            // Superseded or cancelled; a newer request owns the raster
            return;
        };

        let target = (request.target_width, request.target_height);
        if self
            .displayed
            .as_ref()
            .is_some_and(|raster| raster.dimensions() == target)
        {
            return;
        }

        let Some(frame) = self
            .lifecycle
            .source()
            .and_then(SourceImage::current_frame)
        else {
            self.record(DiagnosticEventKind::ResampleDropped {
                reason: "source raster unavailable".to_string(),
            });
            return;
        };

        let strategy = request.strategy();
        let started = Instant::now();
        match resample(frame, request.target_width, request.target_height, strategy) {
            Ok(raster) => {
                self.displayed = Some(raster);
                self.record(DiagnosticEventKind::ResampleCompleted {
                    strategy: strategy.name(),
                    target_width: request.target_width,
                    target_height: request.target_height,
                    duration: started.elapsed(),
                });
            }
            Err(err) => {
                // Recoverable: keep the stale raster on screen
                self.record(DiagnosticEventKind::ResampleDropped {
                    reason: err.to_string(),
                });
            }
        }
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.record(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::test_utils::solid_image as solid;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn viewer_with_viewport(width: f32, height: f32) -> State {
        let mut state = State::new();
        state.handle(Message::ViewportResized { width, height });
        state
    }

    fn settle_pending(state: &mut State) {
        let token = state.pending_resample().expect("a resample is pending");
        state.handle(Message::ResampleSettled(token));
    }

    #[test]
    fn display_emits_image_changed_and_schedules_a_resample() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        let (effect, _task) = state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));

        assert_eq!(effect, Effect::ImageChanged);
        assert!(state.is_displaying());
        assert!(state.pending_resample().is_some());
    }

    #[test]
    fn fit_all_produces_the_fitted_raster_on_settle() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        state.handle(Message::SelectAll);
        settle_pending(&mut state);

        assert_abs_diff_eq!(state.scale(), 0.5);
        let raster = state.displayed_raster().unwrap();
        assert_eq!(raster.dimensions(), (800, 600));
    }

    #[tokio::test]
    async fn displaying_while_in_free_mode_promotes_to_fit_all() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        state.handle(Message::ZoomIn);
        assert_eq!(state.fit_mode(), FitMode::Free);

        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        assert_eq!(state.fit_mode(), FitMode::FitAll);
        assert_abs_diff_eq!(state.scale(), 0.5);
    }

    #[test]
    fn error_source_sets_the_error_state() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        let (effect, _task) = state.handle(Message::Display(SourceImage::decode_error()));

        assert_eq!(effect, Effect::ImageChanged);
        assert!(state.has_error());
        assert!(!state.is_displaying());
        assert!(state.displayed_raster().is_none());
        assert!(state.pending_resample().is_none());
    }

    #[tokio::test]
    async fn superseded_settle_leaves_the_raster_alone() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        let stale = state.pending_resample().unwrap();

        // A zoom supersedes the pending display resample
        state.handle(Message::ZoomIn);
        let before = state.displayed_raster().unwrap().dimensions();
        state.handle(Message::ResampleSettled(stale));
        assert_eq!(state.displayed_raster().unwrap().dimensions(), before);

        settle_pending(&mut state);
        let rect = state.visible_rect();
        assert_eq!(
            state.displayed_raster().unwrap().dimensions(),
            (rect.width.round() as u32, rect.height.round() as u32)
        );
    }

    #[test]
    fn switching_images_cancels_the_pending_resample() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        let stale = state.pending_resample().unwrap();

        state.handle(Message::Display(
            SourceImage::still(solid(400, 300)).unwrap(),
        ));
        // The old token must not produce a raster for the new image
        state.handle(Message::ResampleSettled(stale));
        assert_eq!(state.displayed_raster().unwrap().dimensions(), (400, 300));
    }

    #[tokio::test]
    async fn zoom_round_trip_restores_the_scale() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        state.handle(Message::SelectNormal);
        let original = state.scale();

        state.handle(Message::ZoomIn);
        state.handle(Message::ZoomOut);
        assert_abs_diff_eq!(state.scale(), original, epsilon = F32_EPSILON);
    }

    #[test]
    fn animation_frames_swap_without_a_resample() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::animated(solid(400, 300)).unwrap(),
        ));
        assert!(
            state.pending_resample().is_none(),
            "animated frames are pre-sized"
        );

        state.handle(Message::AnimationFrame(solid(400, 300)));
        assert!(state.displayed_raster().is_some());
        assert!(state.pending_resample().is_none());
    }

    #[test]
    fn double_clicks_surface_as_effects() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        let (effect, _task) = state.handle(Message::DoubleClick(PointerButton::Left));
        assert_eq!(effect, Effect::DoubleClicked);
        let (effect, _task) = state.handle(Message::DoubleClick(PointerButton::Right));
        assert_eq!(effect, Effect::RightDoubleClicked);
    }

    #[tokio::test]
    async fn resize_in_fit_all_recomputes_the_fit() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        state.handle(Message::SelectAll);
        assert_abs_diff_eq!(state.scale(), 0.5);

        state.handle(Message::ViewportResized {
            width: 400.0,
            height: 300.0,
        });
        assert_abs_diff_eq!(state.scale(), 0.25);
    }

    #[tokio::test]
    async fn resize_in_free_mode_only_realigns() {
        let mut state = viewer_with_viewport(800.0, 600.0);
        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        state.handle(Message::ZoomIn);
        let scale = state.scale();

        state.handle(Message::ViewportResized {
            width: 640.0,
            height: 480.0,
        });
        assert_abs_diff_eq!(state.scale(), scale);
    }

    #[test]
    fn from_config_applies_step_and_mode() {
        let config = Config {
            scale_step: Some(0.1),
            fit_mode: Some("width".to_string()),
            background: None,
        };
        let state = State::from_config(&config);
        assert_abs_diff_eq!(state.transform.scale_step.value(), 0.1);
        assert_eq!(state.fit_mode(), FitMode::FitWidth);
    }

    #[test]
    fn diagnostics_record_the_display_and_resample() {
        let collector = DiagnosticsCollector::default();
        let mut state =
            viewer_with_viewport(800.0, 600.0).with_diagnostics(collector.handle());

        state.handle(Message::Display(
            SourceImage::still(solid(1600, 1200)).unwrap(),
        ));
        settle_pending(&mut state);

        let events = collector.events();
        assert!(events.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::ImageDisplayed { width: 1600, .. }
        )));
        assert!(events.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::ResampleCompleted { .. }
        )));
    }
}
