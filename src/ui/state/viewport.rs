// SPDX-License-Identifier: MPL-2.0
//! Viewport state management.
//!
//! One value holds everything the engine needs to answer "what should the
//! visible rectangle and scale be right now": the viewport size, the
//! displayed image's natural size, the current scale and its legal bounds,
//! and the fit mode. Every transition is an explicit method so each one is
//! testable in isolation.

use crate::domain::error::ViewportError;
use crate::domain::scale::ScaleBounds;
use iced::{Point, Rectangle, Size, Vector};

/// Policy governing how scale is recomputed on layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Scale 1.0, centered.
    #[default]
    Normal,
    /// Scale fills the viewport width.
    FitWidth,
    /// Scale fills the viewport, whichever dimension is tighter.
    FitAll,
    /// User-driven scale; not recomputed on resize, only re-clamped.
    Free,
}

impl FitMode {
    /// Parses a persisted mode name. `Free` is never persisted.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(FitMode::Normal),
            "width" => Some(FitMode::FitWidth),
            "all" => Some(FitMode::FitAll),
            _ => None,
        }
    }

    /// The persisted name of this mode.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FitMode::Normal => "normal",
            FitMode::FitWidth => "width",
            FitMode::FitAll => "all",
            FitMode::Free => "free",
        }
    }
}

/// Viewport geometry and scale state.
///
/// The visible rectangle is kept in viewport coordinates; whenever an image
/// is displayed its size equals the image's natural size times the current
/// scale.
#[derive(Debug, Clone)]
pub struct ViewportState {
    viewport_size: Size,
    image_size: Option<(u32, u32)>,
    visible_rect: Rectangle,
    current_scale: f32,
    bounds: ScaleBounds,
    fit_mode: FitMode,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            viewport_size: Size::ZERO,
            image_size: None,
            visible_rect: Rectangle::with_size(Size::ZERO),
            current_scale: 1.0,
            bounds: ScaleBounds::default(),
            fit_mode: FitMode::Normal,
        }
    }
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// The rectangle the painter should blit the displayed raster into.
    #[must_use]
    pub fn visible_rect(&self) -> Rectangle {
        self.visible_rect
    }

    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.current_scale
    }

    #[must_use]
    pub fn bounds(&self) -> ScaleBounds {
        self.bounds
    }

    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_size.is_some()
    }

    /// Whether the displayed raster differs from the source size.
    #[must_use]
    pub fn is_scaled(&self) -> bool {
        self.current_scale != 1.0
    }

    /// Center of the viewport, the anchor for incremental zoom.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_size.width / 2.0, self.viewport_size.height / 2.0)
    }

    fn viewport_is_degenerate(&self) -> bool {
        self.viewport_size.width <= 0.0 || self.viewport_size.height <= 0.0
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LAYOUT TRANSITIONS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport_size = size;
    }

    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Loading a new image while in free zoom reverts to fit-all.
    pub fn promote_free_to_all(&mut self) {
        if self.fit_mode == FitMode::Free {
            self.fit_mode = FitMode::FitAll;
        }
    }

    /// Resets geometry for a newly displayed image: natural size, scale 1.0,
    /// rectangle at the origin.
    pub fn set_image(&mut self, width: u32, height: u32) {
        self.image_size = Some((width, height));
        self.current_scale = 1.0;
        self.visible_rect = Rectangle::with_size(Size::new(width as f32, height as f32));
    }

    /// Clears the displayed image; the rectangle holds its last value so
    /// the painter keeps a stable placeholder area.
    pub fn clear_image(&mut self) {
        self.image_size = None;
        self.current_scale = 1.0;
    }

    /// Recomputes the legal zoom range for the current image and viewport.
    ///
    /// On a degenerate viewport the previous bounds are kept and the error
    /// is returned so the caller can skip the follow-up fit.
    pub fn update_bounds(&mut self) -> Result<(), ViewportError> {
        let Some((width, height)) = self.image_size else {
            return Ok(());
        };
        self.bounds = ScaleBounds::compute(
            width,
            height,
            self.viewport_size.width,
            self.viewport_size.height,
        )?;
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // SCALE
    // ═══════════════════════════════════════════════════════════════════════

    /// Applies a requested scale, clamped into the legal range, and resizes
    /// the visible rectangle from the applied value (top-left preserved).
    ///
    /// Snapping to the zoomed-out end also forces `FitAll`: reaching the
    /// fit-the-viewport scale by any route IS fit-all, and the mode follows
    /// so a later resize keeps the image fitted. Callers must follow with
    /// [`align`](Self::align).
    ///
    /// Returns the applied scale.
    pub fn set_scale(&mut self, requested: f32) -> f32 {
        let Some((width, height)) = self.image_size else {
            return self.current_scale;
        };

        if requested > self.bounds.min_scale() {
            self.current_scale = self.bounds.min_scale();
        } else if self.bounds.at_max(requested) {
            self.current_scale = self.bounds.max_scale();
            self.fit_mode = FitMode::FitAll;
        } else {
            self.current_scale = requested;
        }

        self.visible_rect.width = width as f32 * self.current_scale;
        self.visible_rect.height = height as f32 * self.current_scale;
        self.current_scale
    }

    /// Changes scale while holding `anchor` visually fixed.
    ///
    /// The anchor's fractional position inside the rectangle is recorded,
    /// the scale applied, and the rectangle translated so the same image
    /// point lands back under the anchor. Edge clamping in the final
    /// alignment may shift the anchor slightly when the new rectangle
    /// cannot satisfy both constraints; that loss is accepted.
    ///
    /// Returns the applied scale.
    pub fn scale_around(&mut self, anchor: Point, new_scale: f32) -> f32 {
        if !self.has_image() {
            return self.current_scale;
        }
        let rect = self.visible_rect;
        let fraction_x = (anchor.x - rect.x) / rect.width;
        let fraction_y = (anchor.y - rect.y) / rect.height;
        let old_offset_x = fraction_x * rect.width;
        let old_offset_y = fraction_y * rect.height;

        let applied = self.set_scale(new_scale);

        let new_offset_x = fraction_x * self.visible_rect.width;
        let new_offset_y = fraction_y * self.visible_rect.height;
        self.visible_rect.x = rect.x - (new_offset_x - old_offset_x);
        self.visible_rect.y = rect.y - (new_offset_y - old_offset_y);

        self.align();
        applied
    }

    // ═══════════════════════════════════════════════════════════════════════
    // GEOMETRY
    // ═══════════════════════════════════════════════════════════════════════

    /// Moves the rectangle's center to the viewport center, then aligns.
    pub fn center_image(&mut self) {
        self.visible_rect.x = (self.viewport_size.width - self.visible_rect.width) / 2.0;
        self.visible_rect.y = (self.viewport_size.height - self.visible_rect.height) / 2.0;
        self.align();
    }

    /// Fixes the rectangle position per axis: centered when it fits the
    /// viewport on that axis, otherwise clamped so no empty space shows
    /// past an edge. A degenerate viewport holds the last good rectangle.
    pub fn align(&mut self) {
        if self.viewport_is_degenerate() {
            return;
        }
        let viewport = self.viewport_size;
        let rect = &mut self.visible_rect;

        if rect.height <= viewport.height {
            rect.y = (viewport.height - rect.height) / 2.0;
        } else {
            if rect.y > 0.0 && rect.y + rect.height > viewport.height {
                rect.y = 0.0;
            }
            if viewport.height - rect.y > rect.height {
                rect.y = viewport.height - rect.height;
            }
        }

        if rect.width <= viewport.width {
            rect.x = (viewport.width - rect.width) / 2.0;
        } else {
            if rect.x > 0.0 && rect.x + rect.width > viewport.width {
                rect.x = 0.0;
            }
            if viewport.width - rect.x > rect.width {
                rect.x = viewport.width - rect.width;
            }
        }
    }

    /// Translates the rectangle by a pan delta. Axes where the content
    /// already fits are left alone (alignment keeps them centered); the
    /// follow-up alignment clamps any overshoot back to the edges.
    pub fn pan_by(&mut self, delta: Vector) {
        if self.visible_rect.width > self.viewport_size.width {
            self.visible_rect.x += delta.x;
        }
        if self.visible_rect.height > self.viewport_size.height {
            self.visible_rect.y += delta.y;
        }
        self.align();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // FIT
    // ═══════════════════════════════════════════════════════════════════════

    /// Scale 1.0, centered.
    pub fn fit_normal(&mut self) {
        if self.viewport_is_degenerate() {
            return;
        }
        self.set_scale(1.0);
        self.center_image();
    }

    /// Scale so the image fills the viewport width.
    pub fn fit_width(&mut self) {
        if self.viewport_is_degenerate() {
            return;
        }
        let Some((width, _)) = self.image_size else {
            self.center_image();
            return;
        };
        let scale = self.viewport_size.width / width as f32;
        self.set_scale(scale);
        self.align();
    }

    /// Scale so the image fits the viewport entirely; falls back to
    /// [`fit_normal`](Self::fit_normal) when it already does.
    pub fn fit_all(&mut self) {
        if self.viewport_is_degenerate() {
            return;
        }
        let Some((width, height)) = self.image_size else {
            self.align();
            return;
        };
        let fits_entirely = width as f32 <= self.viewport_size.width
            && height as f32 <= self.viewport_size.height;
        if fits_entirely {
            self.fit_normal();
        } else {
            self.set_scale(self.bounds.max_scale());
            self.align();
        }
    }

    /// Re-runs the fit computation for the current mode. Free zoom is not
    /// recomputed, only re-aligned by the callers that resize.
    pub fn fit_default(&mut self) {
        match self.fit_mode {
            FitMode::Normal => self.fit_normal(),
            FitMode::FitWidth => self.fit_width(),
            FitMode::FitAll => self.fit_all(),
            FitMode::Free => {}
        }
    }
}
