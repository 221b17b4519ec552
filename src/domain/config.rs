// ============================================================================
// Pipeline Configuration
// Precision settings carried by each transformer instance
// ============================================================================

use crate::numeric::Quotient;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fractional digits computed by the division stage unless configured otherwise.
pub const DEFAULT_DIVISION_SCALE: u32 = 20;

/// Fractional digits kept by the format stage unless configured otherwise.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 10;

/// Upper bound on the division scale accepted by `validate`.
pub const MAX_DIVISION_SCALE: u32 = Quotient::MAX_SCALE;

/// Precision configuration for one transformation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineConfig {
    /// Fractional digits computed when dividing (truncated, never rounded)
    pub division_scale: u32,

    /// Fractional digits kept after formatting the quotient
    pub max_fraction_digits: usize,
}

impl PipelineConfig {
    /// Create a configuration with the default precision
    pub fn new() -> Self {
        Self {
            division_scale: DEFAULT_DIVISION_SCALE,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
        }
    }

    /// Builder method: Set the division scale
    pub fn with_division_scale(mut self, scale: u32) -> Self {
        self.division_scale = scale;
        self
    }

    /// Builder method: Set the fractional digit cap applied by formatting
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_fraction_digits == 0 {
            return Err("Maximum fraction digits must be at least 1".to_string());
        }

        if (self.division_scale as usize) < self.max_fraction_digits {
            return Err(format!(
                "Division scale ({}) must cover the {} fraction digits kept by formatting",
                self.division_scale, self.max_fraction_digits
            ));
        }

        if self.division_scale > MAX_DIVISION_SCALE {
            return Err(format!(
                "Division scale cannot exceed {}",
                MAX_DIVISION_SCALE
            ));
        }

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new()
    }
}
