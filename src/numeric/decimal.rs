// ============================================================================
// rust_decimal Codec
// Coefficient/exponent view of rust_decimal::Decimal (96-bit mantissa)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::DecimalParts;
use crate::interfaces::DecimalCodec;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use rust_decimal::Decimal;

/// Largest scale a `rust_decimal::Decimal` can carry
const MAX_SCALE: u32 = 28;

/// Width of the unsigned mantissa
const MANTISSA_BITS: u64 = 96;

impl DecimalCodec for Decimal {
    /// `(mantissa, -scale)`. Never fails: every `Decimal` is finite.
    fn decompose(&self) -> NumericResult<DecimalParts> {
        Ok(DecimalParts::new(self.mantissa(), -(self.scale() as i32)))
    }

    /// Positive exponents are folded into the mantissa, so the result always
    /// has a scale of at least 0.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the scale would exceed 28 and the coefficient has
    ///   no trailing zeros left to strip
    /// - `EncodeOverflow` if the mantissa does not fit in 96 bits, even after
    ///   trailing zeros are shed from the scale
    fn encode(parts: &DecimalParts) -> NumericResult<Self> {
        let ten = BigInt::from(10u8);
        let mut coefficient = parts.coefficient().clone();
        let mut exponent = parts.exponent();

        if exponent > 0 {
            if coefficient.is_zero() {
                exponent = 0;
            } else if exponent > MAX_SCALE as i32 {
                // 10^29 already exceeds the 96-bit mantissa
                return Err(NumericError::EncodeOverflow);
            } else {
                coefficient *= ten.pow(exponent as u32);
                exponent = 0;
            }
        }

        while exponent < -(MAX_SCALE as i32) {
            if coefficient.is_zero() {
                exponent = -(MAX_SCALE as i32);
                break;
            }
            let (quotient, remainder) = coefficient.div_rem(&ten);
            if !remainder.is_zero() {
                return Err(NumericError::PrecisionLoss);
            }
            coefficient = quotient;
            exponent += 1;
        }

        // Too wide for 96 bits: shed trailing zeros from the scale
        while coefficient.bits() > MANTISSA_BITS && exponent < 0 {
            let (quotient, remainder) = coefficient.div_rem(&ten);
            if !remainder.is_zero() {
                return Err(NumericError::EncodeOverflow);
            }
            coefficient = quotient;
            exponent += 1;
        }

        let mantissa = coefficient.to_i128().ok_or(NumericError::EncodeOverflow)?;
        Decimal::try_from_i128_with_scale(mantissa, (-exponent) as u32)
            .map_err(|_| NumericError::EncodeOverflow)
    }

    #[inline]
    fn zero() -> Self {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        let d = Decimal::new(12345, 2); // 123.45
        assert_eq!(d.decompose().unwrap(), DecimalParts::new(12345, -2));

        let neg = Decimal::new(-5, 0);
        assert_eq!(neg.decompose().unwrap(), DecimalParts::new(-5, 0));
    }

    #[test]
    fn test_encode_keeps_scale() {
        let d = Decimal::encode(&DecimalParts::new(150, -2)).unwrap();
        assert_eq!(d.to_string(), "1.50");
        assert_eq!(d.scale(), 2);
    }

    #[test]
    fn test_encode_positive_exponent() {
        let d = Decimal::encode(&DecimalParts::new(25, 2)).unwrap();
        assert_eq!(d, Decimal::from(2500));
        assert_eq!(d.scale(), 0);
    }

    #[test]
    fn test_encode_strips_excess_scale() {
        let d = Decimal::encode(&DecimalParts::new(1000, -30)).unwrap();
        assert_eq!(d.decompose().unwrap(), DecimalParts::new(10, -28));

        assert_eq!(
            Decimal::encode(&DecimalParts::new(1, -29)),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_encode_overflow() {
        // 2^96 does not fit the 96-bit mantissa
        let too_big = DecimalParts::new(BigInt::from(1u8) << 96, 0);
        assert_eq!(Decimal::encode(&too_big), Err(NumericError::EncodeOverflow));

        let max = DecimalParts::new(Decimal::MAX.mantissa(), 0);
        assert_eq!(Decimal::encode(&max).unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_encode_sheds_zeros_to_fit_mantissa() {
        // 10.0000000000000000 squared: 10^34 at scale 32
        let ten = Decimal::new(100_000_000_000_000_000, 16);
        let product = DecimalParts::new(
            ten.mantissa() * ten.mantissa(),
            -2 * ten.scale() as i32,
        );
        let d = Decimal::encode(&product).unwrap();
        assert_eq!(d, Decimal::from(100));
        assert!(d.scale() <= MAX_SCALE);

        // Wide and not divisible by ten
        let odd = DecimalParts::new((BigInt::from(1u8) << 100) + 1, -5);
        assert_eq!(Decimal::encode(&odd), Err(NumericError::EncodeOverflow));
    }

    #[test]
    fn test_zero() {
        assert_eq!(<Decimal as DecimalCodec>::zero(), Decimal::ZERO);
        assert_eq!(
            Decimal::encode(&DecimalParts::new(0, -40)).unwrap(),
            Decimal::ZERO
        );
    }
}
