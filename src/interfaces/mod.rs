// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod stage_observer;

pub use stage_observer::{
    LoggingObserver, NoOpObserver, RecordingObserver, StageEvent, StageObserver,
};
