//! Port for structured evaluation diagnostics.
//!
//! Defines the [`EvaluationLogger`] trait for recording evaluation events
//! (normalized facts, per-query outcomes, soft query faults) to a structured
//! log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record of each evaluation (JSONL).

use serde_json::Value;

/// A structured evaluation event for logging.
pub struct EvaluationEvent {
    /// Event type identifier (e.g., "facts_normalized", "query_fault").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl EvaluationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging evaluation events to a structured log.
///
/// `log` is synchronous and infallible; implementations swallow their own
/// write failures.
pub trait EvaluationLogger: Send + Sync {
    /// Record an evaluation event.
    fn log(&self, event: EvaluationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoEvaluationLogger;

impl EvaluationLogger for NoEvaluationLogger {
    fn log(&self, _event: EvaluationEvent) {}
}
