// ============================================================================
// Stage Observer Interface
// Diagnostic hook receiving the output of every pipeline stage
// ============================================================================

use crate::domain::TransformError;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted while a transformation runs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StageEvent {
    /// Both inputs merged character by character
    Interleaved { interleaved: String },

    /// Letters replaced by their alphabet positions
    Encoded { digits: String },

    /// Digit string divided by the divisor
    Divided { quotient: String },

    /// Quotient normalised to `integer.fraction`
    Formatted { formatted: String },

    /// Sides of the decimal point exchanged
    Swapped { swapped: String },

    /// Both sides decoded, final result produced
    Completed { result: String },

    /// Transformation stopped early
    Rejected { error: TransformError },
}

/// Observer trait for pipeline diagnostics.
/// Observers never influence the result.
pub trait StageObserver: Send + Sync {
    /// Handle a stage event
    fn on_event(&self, event: StageEvent);
}

/// No-op observer
pub struct NoOpObserver;

impl StageObserver for NoOpObserver {
    fn on_event(&self, _event: StageEvent) {}
}

/// Logging observer
pub struct LoggingObserver;

impl StageObserver for LoggingObserver {
    fn on_event(&self, event: StageEvent) {
        match &event {
            StageEvent::Rejected { error } => {
                tracing::debug!(%error, "Transformation rejected");
            },
            _ => tracing::debug!("Pipeline stage: {:?}", event),
        }
    }
}

/// Observer that keeps every event for later inspection
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<StageEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<StageEvent> {
        self.events.lock().clone()
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl StageObserver for RecordingObserver {
    fn on_event(&self, event: StageEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_observer() {
        let observer = NoOpObserver;
        observer.on_event(StageEvent::Encoded {
            digits: "1324".to_string(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_observer() {
        let observer = LoggingObserver;
        observer.on_event(StageEvent::Rejected {
            error: TransformError::DivisionByZero,
        });
    }

    #[test]
    fn test_recording_observer() {
        let observer = RecordingObserver::new();
        observer.on_event(StageEvent::Interleaved {
            interleaved: "ACBD".to_string(),
        });
        observer.on_event(StageEvent::Encoded {
            digits: "1324".to_string(),
        });

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            StageEvent::Encoded {
                digits: "1324".to_string()
            }
        );

        observer.clear();
        assert!(observer.events().is_empty());
    }
}
