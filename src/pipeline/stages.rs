// ============================================================================
// Pipeline Stages
// Interleave -> encode -> divide -> format -> swap -> decode left/right
// ============================================================================
//
// Every stage is a pure function of its inputs. The output format of each
// stage is consumed verbatim by the next one, so the contracts below are
// tight: `encode_letters` yields only ASCII digits, `format_quotient` always
// yields a non-empty fraction, and the decoders assume nothing beyond that.

use crate::domain::{Formatted, Swapped, TransformError};
use crate::numeric::{NumericError, Quotient};

// ============================================================================
// Stage 1: Interleave
// ============================================================================

/// Merge two strings one UTF-16 code unit at a time, `left` first.
///
/// Once the shorter input runs out the rest of the longer one is appended
/// unchanged. A surrogate pair split by the merge decodes to U+FFFD on each
/// side, which the letter encoder drops.
pub fn interleave(left: &str, right: &str) -> String {
    let mut merged: Vec<u16> = Vec::with_capacity(left.len() + right.len());
    let mut left_units = left.encode_utf16();
    let mut right_units = right.encode_utf16();

    loop {
        let l = left_units.next();
        let r = right_units.next();
        if l.is_none() && r.is_none() {
            break;
        }
        merged.extend(l);
        merged.extend(r);
    }

    String::from_utf16_lossy(&merged)
}

// ============================================================================
// Stage 2: Letter Encode
// ============================================================================

/// Replace each letter with its 1-based alphabet position, dropping
/// everything else.
///
/// Uppercasing uses full Unicode case mapping before the A-Z filter, so a
/// character such as `ß` contributes the two letters `SS`.
pub fn encode_letters(text: &str) -> String {
    let mut digits = String::with_capacity(text.len() * 2);

    for c in text.to_uppercase().chars() {
        if c.is_ascii_uppercase() {
            let position = c as u8 - b'A' + 1;
            digits.push_str(&position.to_string());
        }
    }

    digits
}

// ============================================================================
// Stage 3: Divide
// ============================================================================

/// Divide the encoded digits by `divisor`, keeping `scale` fractional digits.
///
/// `scale` is clamped to `Quotient::MAX_SCALE`.
///
/// # Errors
/// - `NoValidLetters` if `digits` is empty or not a digit string
/// - `DivisionByZero` if `divisor` is zero
pub fn divide(digits: &str, divisor: i64, scale: u32) -> Result<Quotient, TransformError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TransformError::NoValidLetters);
    }
    if divisor == 0 {
        return Err(TransformError::DivisionByZero);
    }

    let scale = scale.min(Quotient::MAX_SCALE);
    Quotient::divide(digits, divisor, scale).map_err(|err| match err {
        NumericError::DivisionByZero => TransformError::DivisionByZero,
        NumericError::InvalidInput => TransformError::NoValidLetters,
        // Unreachable: both input conditions are checked above, the scale is
        // clamped, and PrecisionLoss/Overflow only come from `to_decimal`.
        NumericError::ScaleTooLarge | NumericError::PrecisionLoss | NumericError::Overflow => {
            TransformError::NoValidLetters
        },
    })
}

// ============================================================================
// Stage 4: Format
// ============================================================================

/// Normalise a quotient to `integer.fraction`.
///
/// A whole quotient gets the fraction `0`; longer fractions are truncated
/// (not rounded) to `max_fraction_digits`.
pub fn format_quotient(quotient: &Quotient, max_fraction_digits: usize) -> Formatted {
    let significant = quotient.significant_fraction();
    let fraction = if significant.is_empty() {
        "0".to_string()
    } else {
        significant[..significant.len().min(max_fraction_digits)].to_string()
    };

    Formatted {
        integer: quotient.integer_part(),
        fraction,
    }
}

// ============================================================================
// Stage 5: Swap
// ============================================================================

/// Exchange the sides of the decimal point.
#[inline]
pub fn swap_point(formatted: Formatted) -> Swapped {
    formatted.swap()
}

// ============================================================================
// Stage 6: Left Decode
// ============================================================================

/// Decode two-character windows into uppercase letters.
///
/// A window whose numeric value lies in 1..=26 becomes `A`..`Z` (so `05`
/// becomes `E`). Any other window, `00` and `27`..`99` included, is copied
/// through. A trailing unpaired character is copied through as well.
pub fn decode_left(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut decoded = String::with_capacity(chars.len());

    for window in chars.chunks(2) {
        match *window {
            [first, second] => match window_value(first, second) {
                Some(value @ 1..=26) => decoded.push(letter(b'A', value)),
                _ => {
                    decoded.push(first);
                    decoded.push(second);
                },
            },
            [single] => decoded.push(single),
            _ => {},
        }
    }

    decoded
}

fn window_value(first: char, second: char) -> Option<u32> {
    Some(first.to_digit(10)? * 10 + second.to_digit(10)?)
}

// ============================================================================
// Stage 7: Right Decode
// ============================================================================

/// Decode single digits into lowercase letters.
///
/// `1`..`9` become `a`..`i`, `0` becomes the token `NaN`, and any other
/// character (the sign of a negative quotient) is copied through.
pub fn decode_right(digits: &str) -> String {
    let mut decoded = String::with_capacity(digits.len() * 3);

    for c in digits.chars() {
        match c {
            '0' => decoded.push_str("NaN"),
            '1'..='9' => decoded.push(letter(b'a', c as u32 - '0' as u32)),
            other => decoded.push(other),
        }
    }

    decoded
}

/// Map a 1-based position onto the alphabet starting at `base`.
#[inline]
fn letter(base: u8, position: u32) -> char {
    char::from(base + (position - 1) as u8)
}

// ============================================================================
// Tests
// ============================================================================
