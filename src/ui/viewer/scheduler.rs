// SPDX-License-Identifier: MPL-2.0
//! Debounced scheduling of resample work.
//!
//! Bursts of zoom/resize events coalesce into one expensive resample: each
//! new request supersedes the pending one (no queue), and the settle
//! message that eventually arrives carries a token that must still match
//! the scheduler's generation. A stale token means a newer request (or a
//! cancellation) won the race, and the settle is dropped. The same check
//! guards against stale results when the resample itself is offloaded.

use crate::config::{SETTLE_DRAG_ZOOM_MS, SETTLE_RESIZE_MS, SETTLE_STEP_ZOOM_MS};
use crate::media::ResampleStrategy;
use std::time::Duration;

/// Debounce policy for one schedule call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleDelay {
    /// Explicit fit or zoom-confirm: resample right away.
    Immediate,
    /// Continuous drag-zoom gesture.
    DragZoom,
    /// Incremental zoom step.
    StepZoom,
    /// Viewport resize in progress.
    Resize,
}

impl SettleDelay {
    /// The wall-clock delay before the request settles.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            SettleDelay::Immediate => Duration::ZERO,
            SettleDelay::DragZoom => Duration::from_millis(SETTLE_DRAG_ZOOM_MS),
            SettleDelay::StepZoom => Duration::from_millis(SETTLE_STEP_ZOOM_MS),
            SettleDelay::Resize => Duration::from_millis(SETTLE_RESIZE_MS),
        }
    }
}

/// Identity of one scheduled request; returned to the timer and checked at
/// settle time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResampleToken(u64);

/// What raster to produce once the burst settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResampleRequest {
    /// Width of the raster to produce.
    pub target_width: u32,
    /// Height of the raster to produce.
    pub target_height: u32,
    /// Scale factor the target size was derived from.
    pub scale: f32,
    /// Natural size of the source image.
    pub source_dimensions: (u32, u32),
}

impl ResampleRequest {
    /// Picks the resampling strategy for this request.
    #[must_use]
    pub fn strategy(&self) -> ResampleStrategy {
        ResampleStrategy::select(
            self.scale,
            self.source_dimensions,
            (self.target_width, self.target_height),
        )
    }
}

/// Debouncing scheduler; at most one request is pending at a time.
#[derive(Debug, Clone, Default)]
pub struct ResampleScheduler {
    generation: u64,
    pending: Option<ResampleRequest>,
}

impl ResampleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a request, superseding any pending one, and returns the
    /// token the settle timer must hand back together with the delay to
    /// wait.
    pub fn schedule(
        &mut self,
        request: ResampleRequest,
        delay: SettleDelay,
    ) -> (ResampleToken, Duration) {
        self.generation += 1;
        self.pending = Some(request);
        (ResampleToken(self.generation), delay.duration())
    }

    /// Invalidates the pending request, if any. Used when the image is
    /// switched or the viewer is torn down.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Resolves a settle message. Returns the request to execute, or
    /// `None` when the token is stale (superseded or cancelled).
    pub fn settle(&mut self, token: ResampleToken) -> Option<ResampleRequest> {
        if token.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the pending request, for hosts that drive settles without
    /// the timer plumbing.
    #[must_use]
    pub fn current_token(&self) -> Option<ResampleToken> {
        self.pending.as_ref().map(|_| ResampleToken(self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(width: u32) -> ResampleRequest {
        ResampleRequest {
            target_width: width,
            target_height: width,
            scale: 0.5,
            source_dimensions: (width * 2, width * 2),
        }
    }

    #[test]
    fn settle_returns_the_scheduled_request() {
        let mut scheduler = ResampleScheduler::new();
        let (token, _) = scheduler.schedule(request(400), SettleDelay::Immediate);

        assert!(scheduler.is_pending());
        assert_eq!(scheduler.settle(token), Some(request(400)));
        assert!(!scheduler.is_pending());
    }

    #[test]
    fn newer_request_supersedes_the_pending_one() {
        let mut scheduler = ResampleScheduler::new();
        let (first, _) = scheduler.schedule(request(400), SettleDelay::Resize);
        let (second, _) = scheduler.schedule(request(800), SettleDelay::Resize);

        assert_eq!(scheduler.settle(first), None);
        assert_eq!(scheduler.settle(second), Some(request(800)));
    }

    #[test]
    fn cancel_invalidates_outstanding_tokens() {
        let mut scheduler = ResampleScheduler::new();
        let (token, _) = scheduler.schedule(request(400), SettleDelay::StepZoom);
        scheduler.cancel();

        assert!(!scheduler.is_pending());
        assert_eq!(scheduler.settle(token), None);
    }

    #[test]
    fn settle_consumes_the_request_once() {
        let mut scheduler = ResampleScheduler::new();
        let (token, _) = scheduler.schedule(request(400), SettleDelay::Immediate);

        assert!(scheduler.settle(token).is_some());
        assert_eq!(scheduler.settle(token), None);
    }

    #[test]
    fn delays_match_the_settle_policy() {
        assert_eq!(SettleDelay::Immediate.duration(), Duration::ZERO);
        assert_eq!(SettleDelay::DragZoom.duration(), Duration::from_millis(75));
        assert_eq!(SettleDelay::StepZoom.duration(), Duration::from_millis(100));
        assert_eq!(SettleDelay::Resize.duration(), Duration::from_millis(150));
    }

    #[test]
    fn request_strategy_uses_scale_and_sizes() {
        let request = ResampleRequest {
            target_width: 800,
            target_height: 600,
            scale: 0.5,
            source_dimensions: (1600, 1200),
        };
        assert_eq!(request.strategy(), ResampleStrategy::Quality);
    }
}
