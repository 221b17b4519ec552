// ============================================================================
// Exact Quotient
// Arbitrary-precision decimal quotient with an explicit fractional scale
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// Result of dividing a big non-negative integer by a signed machine integer.
///
/// The quotient is truncated toward zero at `scale` fractional digits and
/// remembers whether anything was cut off. Sign and magnitude are stored
/// separately so a negative value below one still renders as `-0.xxx`.
///
/// # Example
/// ```
/// use letter_ritual::numeric::Quotient;
///
/// let q = Quotient::divide("1324", 8, 20).unwrap();
/// assert_eq!(q.to_string(), "165.5");
/// assert!(q.is_exact());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Quotient {
    negative: bool,
    integer: BigUint,
    /// Exactly `scale` digits, zero-padded on the left.
    fraction: String,
    exact: bool,
}

impl Quotient {
    /// Largest fractional scale `divide` accepts.
    pub const MAX_SCALE: u32 = 1000;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Divide the decimal digit string `digits` by `divisor`.
    ///
    /// # Errors
    /// - `InvalidInput` if `digits` is empty or holds anything but `0-9`
    /// - `DivisionByZero` if `divisor` is zero
    /// - `ScaleTooLarge` if `scale` exceeds `MAX_SCALE`
    ///
    /// No other variant is ever returned.
    pub fn divide(digits: &str, divisor: i64, scale: u32) -> NumericResult<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }
        if divisor == 0 {
            return Err(NumericError::DivisionByZero);
        }
        if scale > Self::MAX_SCALE {
            return Err(NumericError::ScaleTooLarge);
        }

        let dividend =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;
        let magnitude = BigUint::from(divisor.unsigned_abs());
        let shift = BigUint::from(10u32).pow(scale);

        let scaled = &dividend * &shift;
        let truncated = &scaled / &magnitude;
        let exact = (&scaled % &magnitude).is_zero();

        let integer = &truncated / &shift;
        let fraction = if scale == 0 {
            String::new()
        } else {
            let raw = (&truncated % &shift).to_str_radix(10);
            format!("{:0>width$}", raw, width = scale as usize)
        };

        Ok(Self {
            negative: divisor < 0 && !dividend.is_zero(),
            integer,
            fraction,
            exact,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whether the quotient is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether the division left no remainder at the computed scale.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Number of fractional digits that were computed.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.fraction.len() as u32
    }

    /// Integer part including a leading `-` for negative quotients.
    pub fn integer_part(&self) -> String {
        if self.negative {
            format!("-{}", self.integer)
        } else {
            self.integer.to_string()
        }
    }

    /// Fractional digits that carry information.
    ///
    /// Trailing zeros are dropped only when the division was exact; an
    /// inexact quotient keeps every computed digit because the true
    /// expansion continues past them.
    pub fn significant_fraction(&self) -> &str {
        if self.exact {
            self.fraction.trim_end_matches('0')
        } else {
            &self.fraction
        }
    }

    // ========================================================================
    // Conversion to rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `Overflow` if the integer part exceeds the 96-bit mantissa
    /// - `PrecisionLoss` if the fractional digits cannot be held exactly
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        let rendered = self.to_string();
        match rust_decimal::Decimal::from_str_exact(&rendered) {
            Ok(d) => Ok(d),
            Err(_) => match rust_decimal::Decimal::from_str(&self.integer_part()) {
                Ok(_) => Err(NumericError::PrecisionLoss),
                Err(_) => Err(NumericError::Overflow),
            },
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Quotient {
    /// Plain positional notation, never scientific.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.significant_fraction();
        if fraction.is_empty() {
            write!(f, "{}", self.integer_part())
        } else {
            write!(f, "{}.{}", self.integer_part(), fraction)
        }
    }
}

impl fmt::Debug for Quotient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quotient({}, scale={}, exact={})",
            self,
            self.scale(),
            self.exact
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
