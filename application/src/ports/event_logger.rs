//! Port for structured picker event logging.
//!
//! Defines the [`EventLogger`] trait for recording pool edits, draws and
//! question changes to a machine-readable log (JSONL).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps an audit trail of what
//! was drawn from which pool.

use serde_json::Value;

/// A structured picker event for logging.
pub struct PickerEvent {
    /// Event type identifier (e.g., "name_added", "winner_drawn").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl PickerEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging picker events.
///
/// The `log` method is synchronous and non-fallible; logging failures are
/// silently ignored.
pub trait EventLogger: Send + Sync {
    /// Record a picker event.
    fn log(&self, event: PickerEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEventLogger;

impl EventLogger for NoEventLogger {
    fn log(&self, _event: PickerEvent) {}
}
