// ============================================================================
// Divisor Parsing
// Lenient integer parsing for callers that hold the divisor as text
// ============================================================================

use crate::domain::TransformError;

/// Parse the leading integer of `text`.
///
/// Leading whitespace and one optional sign are accepted, then the longest
/// run of ASCII digits is taken and anything after it ignored, so `"12abc"`
/// parses as `12`.
///
/// # Errors
/// Returns `DivisorNotNumeric` when no digit follows the optional sign or the
/// value does not fit in an `i64`.
pub fn parse_divisor(text: &str) -> Result<i64, TransformError> {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (sign, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return Err(TransformError::DivisorNotNumeric);
    }

    format!("{}{}", sign, digits)
        .parse::<i64>()
        .map_err(|_| TransformError::DivisorNotNumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers() {
        assert_eq!(parse_divisor("2"), Ok(2));
        assert_eq!(parse_divisor("-17"), Ok(-17));
        assert_eq!(parse_divisor("+5"), Ok(5));
        assert_eq!(parse_divisor("0"), Ok(0));
    }

    #[test]
    fn test_leading_whitespace_and_trailing_garbage() {
        assert_eq!(parse_divisor("  42"), Ok(42));
        assert_eq!(parse_divisor("\t7 apples"), Ok(7));
        assert_eq!(parse_divisor("12abc"), Ok(12));
        assert_eq!(parse_divisor("3.9"), Ok(3));
        assert_eq!(parse_divisor("0x1A"), Ok(0));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(parse_divisor("-0"), Ok(0));
    }

    #[test]
    fn test_not_numeric() {
        for input in ["", "   ", "abc", "-", "+x", "- 5", "\u{0665}"] {
            assert_eq!(
                parse_divisor(input),
                Err(TransformError::DivisorNotNumeric),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parse_divisor("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(
            parse_divisor("9223372036854775808"),
            Err(TransformError::DivisorNotNumeric)
        );
    }

    #[test]
    fn test_long_leading_zeros() {
        assert_eq!(parse_divisor("0000000000000000000000000005"), Ok(5));
    }
}
