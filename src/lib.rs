// ============================================================================
// Letter Ritual Library
// Deterministic letter/number transformation pipeline
// ============================================================================

//! # Letter Ritual
//!
//! Turns one integer and two strings into a single formatted string through a
//! fixed sequence of encode, divide and decode stages.
//!
//! ## Stages
//!
//! 1. **Interleave** both strings character by character
//! 2. **Encode** letters as their alphabet positions (`A`=1 ... `Z`=26)
//! 3. **Divide** the resulting digit string by the integer, exactly
//! 4. **Format** the quotient as `integer.fraction` (at most 10 fraction digits)
//! 5. **Swap** the two sides of the decimal point
//! 6. **Decode left** side in pairs to uppercase letters
//! 7. **Decode right** side digit by digit to lowercase letters (`0` -> `NaN`)
//!
//! Errors never escape as panics: the caller always receives a string, either
//! the result or one of the fixed `ERROR: ...` sentinels.
//!
//! ## Example
//!
//! ```rust
//! use letter_ritual::prelude::*;
//! use std::sync::Arc;
//!
//! let observer = Arc::new(RecordingObserver::new());
//! let transformer = Transformer::new(observer.clone());
//!
//! assert_eq!(transformer.transform(2, "AB", "CD"), "0.ffb");
//! assert_eq!(transformer.transform(5, "123", "456"), "ERROR: No valid letters to process");
//!
//! // Every stage output was reported to the observer
//! assert!(observer
//!     .events()
//!     .iter()
//!     .any(|e| matches!(e, StageEvent::Swapped { swapped } if swapped == "0.662")));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod pipeline;

pub use pipeline::transform;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Formatted, PipelineConfig, Swapped, TransformError};
    pub use crate::interfaces::{
        LoggingObserver, NoOpObserver, RecordingObserver, StageEvent, StageObserver,
    };
    pub use crate::numeric::{NumericError, Quotient};
    pub use crate::pipeline::{parse_divisor, transform, Transformer};
}
