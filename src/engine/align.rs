// ============================================================================
// Scale Alignment
// Rescales coefficients to a shared exponent without losing precision
// ============================================================================

use crate::domain::DecimalParts;
use num_bigint::BigInt;

/// 10^n as a big integer.
#[inline]
pub fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

/// Two coefficients expressed at the same exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned {
    pub lhs: BigInt,
    pub rhs: BigInt,
    pub exponent: i32,
}

/// Align two values to the finer (smaller) of their exponents.
///
/// The operand with the coarser exponent has its coefficient multiplied by
/// 10^difference, so neither operand loses digits.
pub fn align(lhs: &DecimalParts, rhs: &DecimalParts) -> Aligned {
    let exponent = lhs.exponent().min(rhs.exponent());
    Aligned {
        lhs: rescale(lhs, exponent),
        rhs: rescale(rhs, exponent),
        exponent,
    }
}

/// Coefficient of `parts` expressed at `exponent`, which must not exceed
/// `parts.exponent()`.
pub fn rescale(parts: &DecimalParts, exponent: i32) -> BigInt {
    debug_assert!(exponent <= parts.exponent());

    // i32 distance always fits in u32
    let shift = (parts.exponent() as i64 - exponent as i64) as u32;
    if shift == 0 {
        parts.coefficient().clone()
    } else {
        parts.coefficient() * pow10(shift)
    }
}
