// ============================================================================
// Numeric Errors
// Error types for exact decimal division
// ============================================================================

use std::fmt;

/// Errors that can occur while building or converting a quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Attempted division by zero
    DivisionByZero,
    /// Dividend string is empty or contains non-digit characters
    InvalidInput,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Value does not fit the target representation
    Overflow,
    /// Requested fractional scale exceeds `Quotient::MAX_SCALE`
    ScaleTooLarge,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => {
                write!(f, "invalid input: dividend must be a non-empty digit string")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::Overflow => {
                write!(f, "overflow: value exceeds the target representation")
            },
            NumericError::ScaleTooLarge => write!(f, "scale too large for exact division"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
