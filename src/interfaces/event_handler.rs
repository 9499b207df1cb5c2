// ============================================================================
// Event Handler Interface
// Defines the contract for observing rejected operands and lossy fallbacks
// ============================================================================

use crate::domain::Operation;
use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the decimal engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineEvent {
    /// Operand exponent outside the configured bounds
    OperandRejected {
        operation: Operation,
        exponent: i32,
        timestamp: DateTime<Utc>,
    },

    /// Result could not be re-encoded and the zero value was returned instead
    EncodeFallback {
        operation: Operation,
        coefficient: BigInt,
        exponent: i32,
        reason: NumericError,
        timestamp: DateTime<Utc>,
    },
}

impl EngineEvent {
    pub fn operation(&self) -> Operation {
        match self {
            EngineEvent::OperandRejected { operation, .. }
            | EngineEvent::EncodeFallback { operation, .. } => *operation,
        }
    }
}

/// Event handler trait for processing engine events
/// Implementations can handle logging, metrics, alerting, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an engine event
    fn on_event(&self, event: EngineEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<EngineEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: EngineEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: EngineEvent) {
        tracing::debug!("Decimal engine event: {:?}", event);
    }
}

/// Buffers every event so callers can detect lossy fallbacks after the fact
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<EngineEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events recorded so far
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.lock().clone()
    }

    /// Remove and return the recorded events
    pub fn drain(&self) -> Vec<EngineEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Whether any operation fell back to zero
    pub fn saw_fallback(&self) -> bool {
        self.events
            .lock()
            .iter()
            .any(|e| matches!(e, EngineEvent::EncodeFallback { .. }))
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: EngineEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: Vec<EngineEvent>) {
        self.events.lock().extend(events);
    }
}
