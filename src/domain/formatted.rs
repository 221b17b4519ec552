// ============================================================================
// Formatted Quotient
// The `integer.fraction` value and its point-swapped counterpart
// ============================================================================

use std::fmt;

/// Quotient rendered as `integer.fraction`.
///
/// `fraction` is never empty: a whole quotient carries the single digit `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    pub integer: String,
    pub fraction: String,
}

impl Formatted {
    /// Exchange the two sides of the decimal point.
    pub fn swap(self) -> Swapped {
        Swapped {
            left: self.fraction,
            right: self.integer,
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.fraction)
    }
}

/// Formatted quotient after the point swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swapped {
    /// Former fractional digits
    pub left: String,
    /// Former integer digits
    pub right: String,
}

impl fmt::Display for Swapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.left, self.right)
    }
}
