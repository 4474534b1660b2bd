// SPDX-License-Identifier: MPL-2.0
//! The viewer orchestrator and its supporting pieces.

pub mod clusters;
pub mod component;
pub mod scheduler;

pub use component::{Effect, Message, PointerButton, State};
pub use scheduler::{ResampleRequest, ResampleScheduler, ResampleToken, SettleDelay};
