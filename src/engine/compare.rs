// ============================================================================
// Decimal Comparison
// Sign-aware ordering across differing exponents
// ============================================================================

use super::align::pow10;
use crate::domain::DecimalParts;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;

/// Numeric ordering of two decompositions.
///
/// Values of opposite sign are ordered without any arithmetic. Otherwise each
/// magnitude is split into a whole part and a fractional remainder; whole
/// parts are compared first and only the fractional remainders are brought
/// to a common sub-scale. Intermediate growth is bounded by the fractional
/// digit counts rather than by the full exponent gap.
pub fn compare_parts(lhs: &DecimalParts, rhs: &DecimalParts) -> Ordering {
    match (lhs.is_negative(), rhs.is_negative()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    if lhs.exponent() == rhs.exponent() {
        return lhs.coefficient().cmp(rhs.coefficient());
    }

    let magnitude = Split::of(lhs).cmp_magnitude(&Split::of(rhs));
    if lhs.is_negative() {
        magnitude.reverse()
    } else {
        magnitude
    }
}

/// Absolute value split at the decimal point.
struct Split {
    whole: BigInt,
    fraction: BigInt,
    fraction_digits: u32,
}

impl Split {
    fn of(parts: &DecimalParts) -> Self {
        let magnitude = parts.coefficient().abs();
        let exponent = parts.exponent();

        if exponent >= 0 {
            Self {
                whole: magnitude * pow10(exponent as u32),
                fraction: BigInt::zero(),
                fraction_digits: 0,
            }
        } else {
            let fraction_digits = exponent.unsigned_abs();
            let (whole, fraction) = magnitude.div_rem(&pow10(fraction_digits));
            Self {
                whole,
                fraction,
                fraction_digits,
            }
        }
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.whole.cmp(&other.whole) {
            Ordering::Equal => {}
            unequal => return unequal,
        }

        match self.fraction_digits.cmp(&other.fraction_digits) {
            Ordering::Less => {
                let widened = &self.fraction * pow10(other.fraction_digits - self.fraction_digits);
                widened.cmp(&other.fraction)
            }
            Ordering::Greater => {
                let widened = &other.fraction * pow10(self.fraction_digits - other.fraction_digits);
                self.fraction.cmp(&widened)
            }
            Ordering::Equal => self.fraction.cmp(&other.fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(coefficient: i64, exponent: i32) -> DecimalParts {
        DecimalParts::new(coefficient, exponent)
    }

    #[test]
    fn test_opposite_signs() {
        assert_eq!(compare_parts(&p(-1, 10), &p(1, -10)), Ordering::Less);
        assert_eq!(compare_parts(&p(1, -10), &p(-1, 10)), Ordering::Greater);
        // Zero counts as non-negative
        assert_eq!(compare_parts(&p(0, 0), &p(-1, -5)), Ordering::Greater);
    }

    #[test]
    fn test_same_exponent() {
        assert_eq!(compare_parts(&p(150, -2), &p(149, -2)), Ordering::Greater);
        assert_eq!(compare_parts(&p(-150, -2), &p(-149, -2)), Ordering::Less);
        assert_eq!(compare_parts(&p(7, 3), &p(7, 3)), Ordering::Equal);
    }

    #[test]
    fn test_scale_invariant_equality() {
        assert_eq!(compare_parts(&p(150, -2), &p(15, -1)), Ordering::Equal);
        assert_eq!(compare_parts(&p(50, -1), &p(500, -2)), Ordering::Equal);
        assert_eq!(compare_parts(&p(5, 2), &p(50_000, -2)), Ordering::Equal);
        assert_eq!(compare_parts(&p(0, 5), &p(0, -5)), Ordering::Equal);
    }

    #[test]
    fn test_cross_exponent_fraction() {
        // 630.5230005 < 630.7
        assert_eq!(compare_parts(&p(6_305_230_005, -7), &p(6307, -1)), Ordering::Less);
        assert_eq!(compare_parts(&p(6307, -1), &p(6_305_230_005, -7)), Ordering::Greater);
    }

    #[test]
    fn test_cross_exponent_whole() {
        // 1000 > 999.99
        assert_eq!(compare_parts(&p(1, 3), &p(99_999, -2)), Ordering::Greater);
        // 12 × 10^1 = 120 < 121
        assert_eq!(compare_parts(&p(12, 1), &p(121, 0)), Ordering::Less);
    }

    #[test]
    fn test_both_negative_inverts() {
        // -630.5230005 > -630.7
        assert_eq!(compare_parts(&p(-6_305_230_005, -7), &p(-6307, -1)), Ordering::Greater);
        // -1000 < -999.99
        assert_eq!(compare_parts(&p(-1, 3), &p(-99_999, -2)), Ordering::Less);
    }

    #[test]
    fn test_far_apart_exponents() {
        let tiny = p(1, -6000);
        let huge = p(1, 6000);
        assert_eq!(compare_parts(&tiny, &huge), Ordering::Less);
        assert_eq!(compare_parts(&huge, &tiny), Ordering::Greater);
    }
}
