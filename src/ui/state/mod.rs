// SPDX-License-Identifier: MPL-2.0
//! Shared UI state types for the viewer.

pub mod drag;
pub mod viewport;

pub use drag::{DragZoomState, PanState};
pub use viewport::{FitMode, ViewportState};
