// ============================================================================
// Decimal Parts
// Coefficient/exponent decomposition of a decimal value
// ============================================================================

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A decimal value decomposed into `coefficient × 10^exponent`.
///
/// The sign lives in the coefficient. Two parts may represent the same number
/// with different scales (`50 × 10^-1` and `500 × 10^-2`), so the derived
/// equality is representational; numeric ordering is
/// [`compare_parts`](crate::engine::compare_parts).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalParts {
    coefficient: BigInt,
    exponent: i32,
}

impl DecimalParts {
    /// Create from a coefficient and a base-10 exponent.
    #[inline]
    pub fn new(coefficient: impl Into<BigInt>, exponent: i32) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponent,
        }
    }

    /// Zero at exponent 0, the decomposition of `"0"`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(BigInt::zero(), 0)
    }

    #[inline]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Check if the value is zero, regardless of exponent.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    /// Check if the value is strictly negative. Zero is non-negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.coefficient.sign() == Sign::Minus
    }

    /// Same scale, opposite sign.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-&self.coefficient, self.exponent)
    }

    /// Same scale, non-negative coefficient.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// Consume into `(coefficient, exponent)`.
    #[inline]
    pub fn into_inner(self) -> (BigInt, i32) {
        (self.coefficient, self.exponent)
    }
}

impl Default for DecimalParts {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<(BigInt, i32)> for DecimalParts {
    fn from((coefficient, exponent): (BigInt, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

impl fmt::Display for DecimalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}E{}", self.coefficient, self.exponent)
    }
}
