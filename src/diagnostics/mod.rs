// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collection for debugging and support.
//!
//! Events land in a bounded ring buffer behind a cloneable handle, so any
//! part of the engine can record without owning the collector.
//!
//! # Example
//!
//! ```
//! use iced_glance::diagnostics::{DiagnosticsCollector, DiagnosticEventKind};
//!
//! let collector = DiagnosticsCollector::default();
//! let handle = collector.handle();
//!
//! handle.record(DiagnosticEventKind::ErrorRasterShown);
//! assert_eq!(collector.events().len(), 1);
//! ```

mod events;

pub use events::{DiagnosticEvent, DiagnosticEventKind};

use crate::domain::diagnostics::BufferCapacity;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Central collector storing events in a circular buffer.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticsCollector {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    capacity: BufferCapacity,
    events: Mutex<VecDeque<DiagnosticEvent>>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            inner: Arc::new(Inner {
                capacity,
                events: Mutex::new(VecDeque::new()),
            }),
        }
    }

    /// A cloneable handle for recording events into this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Snapshot of the collected events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.inner
            .events
            .lock()
            .map(|events| events.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Drops all collected events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.inner.events.lock() {
            events.clear();
        }
    }
}

/// Thread-safe handle for sending events to a [`DiagnosticsCollector`].
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    inner: Arc<Inner>,
}

impl DiagnosticsHandle {
    /// Records an event, evicting the oldest when the buffer is full.
    pub fn record(&self, kind: DiagnosticEventKind) {
        if let Ok(mut events) = self.inner.events.lock() {
            if events.len() >= self.inner.capacity.value() {
                events.pop_front();
            }
            events.push_back(DiagnosticEvent::now(kind));
        }
    }
}
