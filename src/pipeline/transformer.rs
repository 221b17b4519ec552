// ============================================================================
// Transformer
// Runs the seven stages in order and reports each one to an observer
// ============================================================================

use super::divisor::parse_divisor;
use super::stages::{
    decode_left, decode_right, divide, encode_letters, format_quotient, interleave, swap_point,
};
use crate::domain::{PipelineConfig, TransformError};
use crate::interfaces::{NoOpObserver, StageEvent, StageObserver};
use std::sync::Arc;

/// Stateless transformation pipeline with pluggable diagnostics.
///
/// A `Transformer` holds only its precision settings and an observer, so one
/// instance can be shared across threads and called concurrently.
///
/// # Example
/// ```
/// use letter_ritual::prelude::*;
/// use std::sync::Arc;
///
/// let transformer = Transformer::new(Arc::new(NoOpObserver));
/// assert_eq!(transformer.transform(2, "AB", "CD"), "0.ffb");
/// assert_eq!(
///     transformer.transform(0, "A", "B"),
///     "ERROR: Division by zero is undefined"
/// );
/// ```
pub struct Transformer {
    /// Precision settings
    config: PipelineConfig,

    /// Observer for stage diagnostics
    observer: Arc<dyn StageObserver>,
}

impl Transformer {
    /// Create a transformer with the default precision
    pub fn new(observer: Arc<dyn StageObserver>) -> Self {
        Self {
            config: PipelineConfig::default(),
            observer,
        }
    }

    /// Create a transformer from configuration
    ///
    /// # Errors
    /// Returns the validation message if `config` is inconsistent.
    pub fn from_config(
        config: PipelineConfig,
        observer: Arc<dyn StageObserver>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config, observer })
    }

    /// Get the precision settings
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Transform the inputs, surfacing errors as sentinel strings.
    pub fn transform(&self, divisor: i64, left: &str, right: &str) -> String {
        self.try_transform(divisor, left, right)
            .unwrap_or_else(|error| error.to_string())
    }

    /// Transform inputs whose divisor is still raw text.
    pub fn transform_input(&self, divisor: &str, left: &str, right: &str) -> String {
        match parse_divisor(divisor) {
            Ok(divisor) => self.transform(divisor, left, right),
            Err(error) => {
                self.observer.on_event(StageEvent::Rejected { error });
                error.to_string()
            },
        }
    }

    /// Transform the inputs.
    ///
    /// # Errors
    /// - `NoValidLetters` if neither input holds an ASCII letter
    /// - `DivisionByZero` if `divisor` is zero
    pub fn try_transform(
        &self,
        divisor: i64,
        left: &str,
        right: &str,
    ) -> Result<String, TransformError> {
        let result = self.run(divisor, left, right);
        if let Err(error) = &result {
            self.observer.on_event(StageEvent::Rejected { error: *error });
        }
        result
    }

    fn run(&self, divisor: i64, left: &str, right: &str) -> Result<String, TransformError> {
        let interleaved = interleave(left, right);
        self.observer.on_event(StageEvent::Interleaved {
            interleaved: interleaved.clone(),
        });

        let digits = encode_letters(&interleaved);
        if digits.is_empty() {
            return Err(TransformError::NoValidLetters);
        }
        self.observer.on_event(StageEvent::Encoded {
            digits: digits.clone(),
        });

        let quotient = divide(&digits, divisor, self.config.division_scale)?;
        self.observer.on_event(StageEvent::Divided {
            quotient: quotient.to_string(),
        });

        let formatted = format_quotient(&quotient, self.config.max_fraction_digits);
        self.observer.on_event(StageEvent::Formatted {
            formatted: formatted.to_string(),
        });

        let swapped = swap_point(formatted);
        self.observer.on_event(StageEvent::Swapped {
            swapped: swapped.to_string(),
        });

        let result = format!(
            "{}.{}",
            decode_left(&swapped.left),
            decode_right(&swapped.right)
        );
        self.observer.on_event(StageEvent::Completed {
            result: result.clone(),
        });

        Ok(result)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(Arc::new(NoOpObserver))
    }
}

/// Transform with the default precision and no diagnostics.
///
/// ```
/// assert_eq!(letter_ritual::transform(2, "AB", "CD"), "0.ffb");
/// ```
pub fn transform(divisor: i64, left: &str, right: &str) -> String {
    Transformer::default().transform(divisor, left, right)
}
