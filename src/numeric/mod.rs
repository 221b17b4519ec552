// ============================================================================
// Numeric Module
// Exact decimal arithmetic for the division stage
// ============================================================================
//
// This module provides:
// - Quotient: arbitrary-precision quotient with explicit fractional scale
// - NumericError: Error types for division and conversion
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no panics)
// - Precision is a parameter of each division, never global state

mod errors;
mod quotient;

pub use errors::{NumericError, NumericResult};
pub use quotient::Quotient;
