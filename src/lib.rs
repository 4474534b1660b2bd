// SPDX-License-Identifier: MPL-2.0
//! `iced_glance` is an interactive image-viewing surface built on the Iced
//! GUI framework's types.
//!
//! It tracks the scale, fit mode, and visible rectangle of one displayed
//! image; derives the legal zoom range from image and viewport dimensions;
//! zooms around a fixed point; pans with edge clamping; and debounces
//! bursts of zoom/resize events into one adaptive resample. Pixel
//! blitting, input capture, container decoding, and animation timing stay
//! with the embedding application, reached through
//! [`ui::viewer::Message`]s and [`ui::viewer::Effect`]s.

#![doc(html_root_url = "https://docs.rs/iced_glance/0.2.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result, ViewportError};
pub use media::{ImageData, SourceImage};
pub use ui::state::{FitMode, ViewportState};
pub use ui::viewer::{Effect, Message, PointerButton, State as Viewer};
