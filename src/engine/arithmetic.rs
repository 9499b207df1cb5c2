// ============================================================================
// Decimal Arithmetic
// Add, subtract, multiply and round over coefficient/exponent pairs
// ============================================================================

use super::align::{align, Aligned};
use crate::domain::{DecimalParts, RoundingDirection};
use num_integer::Integer;
use num_traits::Zero;

/// `lhs + rhs` at the finer of the two exponents.
pub fn sum(lhs: &DecimalParts, rhs: &DecimalParts) -> DecimalParts {
    let Aligned {
        lhs,
        rhs,
        exponent,
    } = align(lhs, rhs);
    DecimalParts::new(lhs + rhs, exponent)
}

/// `lhs - rhs`: the subtrahend is negated before alignment.
pub fn difference(lhs: &DecimalParts, rhs: &DecimalParts) -> DecimalParts {
    sum(lhs, &rhs.negated())
}

/// `lhs × rhs`: coefficients multiply, exponents add.
///
/// Exponent sums beyond `i32` saturate. No interchange format represents
/// such a value unless its coefficient is zero, so re-encoding decides.
pub fn product(lhs: &DecimalParts, rhs: &DecimalParts) -> DecimalParts {
    DecimalParts::new(
        lhs.coefficient() * rhs.coefficient(),
        lhs.exponent().saturating_add(rhs.exponent()),
    )
}

/// Round `value` onto the grid of multiples of `unit`.
///
/// - A zero `unit` disables rounding and returns `value` as-is.
/// - A value already on the grid is returned as-is.
/// - Otherwise the result is the grid point below (`Down`) or above (`Up`)
///   the value, expressed at the finer of the two exponents. The sign of
///   `unit` is ignored.
pub fn round_to_unit(
    unit: &DecimalParts,
    direction: RoundingDirection,
    value: &DecimalParts,
) -> DecimalParts {
    if unit.is_zero() {
        return value.clone();
    }

    let Aligned {
        lhs: coefficient,
        rhs: step,
        exponent,
    } = align(value, &unit.abs());

    // Floor modulus: non-negative for a positive step
    let remainder = coefficient.mod_floor(&step);
    if remainder.is_zero() {
        return value.clone();
    }

    let floor = coefficient - remainder;
    let rounded = match direction {
        RoundingDirection::Down => floor,
        RoundingDirection::Up => floor + step,
    };

    DecimalParts::new(rounded, exponent)
}
