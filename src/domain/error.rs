// ============================================================================
// Transform Errors
// Terminal conditions surfaced to callers as fixed sentinel strings
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conditions that end a transformation without a result.
///
/// `Display` yields the exact text shown to the caller in place of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransformError {
    /// Neither input contained an ASCII letter
    NoValidLetters,
    /// The divisor was zero
    DivisionByZero,
    /// The caller's divisor text did not parse as an integer
    DivisorNotNumeric,
}

impl TransformError {
    /// Sentinel string returned in place of a result
    pub const fn message(self) -> &'static str {
        match self {
            TransformError::NoValidLetters => "ERROR: No valid letters to process",
            TransformError::DivisionByZero => "ERROR: Division by zero is undefined",
            TransformError::DivisorNotNumeric => "ERROR: FIRST OFFERING MUST BE NUMERIC",
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for TransformError {}
