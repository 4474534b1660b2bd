// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: zoom step and scale bound parameters
//! - **Resample**: megapixel thresholds for strategy selection
//! - **Settle**: debounce delays for the resample scheduler
//! - **Display**: background fill consumed by the external painter

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Default scale change applied by a single zoom in/out step.
pub const DEFAULT_SCALE_STEP: f32 = 0.05;

/// Minimum allowed zoom step.
pub const MIN_SCALE_STEP: f32 = 0.01;

/// Maximum allowed zoom step.
pub const MAX_SCALE_STEP: f32 = 0.5;

/// Baseline for the most-zoomed-in scale (3x magnification).
pub const MIN_SCALE_BASELINE: f32 = 3.0;

/// Rendered pixel budget in megapixels. The zoom-in ceiling is lowered
/// below the baseline whenever exceeding it would render more than this.
pub const PIXEL_BUDGET_MEGAPIXELS: f32 = 25.0;

/// Divisor mapping vertical drag distance to a scale delta. Negative so
/// that dragging upward zooms in.
pub const DRAG_ZOOM_DISTANCE_DIVISOR: f32 = -500.0;

// ==========================================================================
// Resample Thresholds
// ==========================================================================

/// Source size (megapixels) above which downscaling prefers fast filters.
pub const DOWNSCALE_LARGE_SOURCE_MEGAPIXELS: f32 = 15.0;

/// Destination size (megapixels) above which a large-source downscale
/// skips smoothing entirely.
pub const DOWNSCALE_FAST_DEST_MEGAPIXELS: f32 = 10.0;

/// Destination size (megapixels) above which a large-source downscale
/// uses the fast filter with smoothing instead of the quality filter.
pub const DOWNSCALE_SMOOTH_DEST_MEGAPIXELS: f32 = 4.0;

/// Source size (megapixels) above which upscaling skips smoothing.
pub const UPSCALE_LARGE_SOURCE_MEGAPIXELS: f32 = 10.0;

// ==========================================================================
// Settle Delays
// ==========================================================================

/// Debounce delay (ms) during a continuous drag-zoom gesture.
pub const SETTLE_DRAG_ZOOM_MS: u64 = 75;

/// Debounce delay (ms) after an incremental zoom step.
pub const SETTLE_STEP_ZOOM_MS: u64 = 100;

/// Debounce delay (ms) during viewport resizing.
pub const SETTLE_RESIZE_MS: u64 = 150;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default background fill behind the displayed image (RGB).
pub const DEFAULT_BACKGROUND_RGB: [u8; 3] = [17, 17, 17];

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the diagnostics ring buffer.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 1024;
