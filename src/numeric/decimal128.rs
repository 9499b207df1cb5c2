// ============================================================================
// Decimal128
// IEEE 754-2008 decimal128 interchange value (BID layout, BSON byte order)
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::DecimalParts;
use crate::interfaces::DecimalCodec;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// A 128-bit decimal interchange value.
///
/// Stored as the raw high/low words of the binary integer decimal (BID)
/// encoding:
///
/// ```text
/// high: [sign:1][biased exponent:14][significand high:49]
/// low:  [significand low:64]
/// ```
///
/// The same bit pattern is used on the BSON wire (little-endian, low word
/// first). Equality and hashing compare bit patterns, so `1.5` and `1.50` are
/// different values; use the engine's Compare for numeric ordering.
///
/// # Example
/// ```
/// use decimal_engine::numeric::Decimal128;
///
/// let price: Decimal128 = "1.50".parse().unwrap();
/// let parts = price.decompose().unwrap();
/// assert_eq!(parts.exponent(), -2);
/// assert_eq!(price.to_string(), "1.50");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal128 {
    high: u64,
    low: u64,
}

// ============================================================================
// Format Constants
// ============================================================================

const SIGN_MASK: u64 = 1 << 63;
const EXPONENT_MASK: u64 = (1 << 14) - 1;
const SIGNIFICAND_HIGH_MASK: u64 = (1 << 49) - 1;
const COMBINATION_NAN: u64 = 0x1F;
const COMBINATION_INFINITY: u64 = 0x1E;

impl Decimal128 {
    /// Smallest representable exponent
    pub const MIN_EXPONENT: i32 = -6176;

    /// Largest representable exponent
    pub const MAX_EXPONENT: i32 = 6111;

    /// Exponent bias applied to the stored field
    pub const EXPONENT_BIAS: i32 = 6176;

    /// Maximum number of significant decimal digits
    pub const PRECISION: u32 = 34;

    /// Largest canonical coefficient (10^34 - 1)
    pub const MAX_COEFFICIENT: u128 = 9_999_999_999_999_999_999_999_999_999_999_999;

    /// Zero at exponent 0, the decoding of `"0"`
    pub const ZERO: Self = Self::from_bits((Self::EXPONENT_BIAS as u64) << 49, 0);

    /// Quiet NaN
    pub const NAN: Self = Self::from_bits(0x7C00_0000_0000_0000, 0);

    /// Positive infinity
    pub const INFINITY: Self = Self::from_bits(0x7800_0000_0000_0000, 0);

    /// Negative infinity
    pub const NEG_INFINITY: Self = Self::from_bits(0xF800_0000_0000_0000, 0);

    // ========================================================================
    // Bit-Level Access
    // ========================================================================

    /// Create from the raw high and low words.
    #[inline]
    pub const fn from_bits(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Raw `(high, low)` words.
    #[inline]
    pub const fn to_bits(self) -> (u64, u64) {
        (self.high, self.low)
    }

    /// Create from the 16-byte BSON wire representation.
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let bits = u128::from_le_bytes(bytes);
        Self::from_bits((bits >> 64) as u64, bits as u64)
    }

    /// The 16-byte BSON wire representation.
    pub fn to_le_bytes(self) -> [u8; 16] {
        (((self.high as u128) << 64) | self.low as u128).to_le_bytes()
    }

    #[inline]
    const fn combination(self) -> u64 {
        (self.high >> 58) & 0x1F
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.combination() == COMBINATION_NAN
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.combination() == COMBINATION_INFINITY
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Sign bit. Set for negative values, `-0` and `-Infinity`.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.high & SIGN_MASK != 0
    }

    // ========================================================================
    // Decomposition
    // ========================================================================

    /// Split into `coefficient × 10^exponent`.
    ///
    /// Coefficients encoded with the large-significand form, or above
    /// [`MAX_COEFFICIENT`](Self::MAX_COEFFICIENT), are non-canonical and
    /// decompose to zero.
    ///
    /// # Errors
    /// `NotANumber` or `Infinite` for special values.
    pub fn decompose(&self) -> NumericResult<DecimalParts> {
        if self.is_nan() {
            return Err(NumericError::NotANumber);
        }
        if self.is_infinite() {
            return Err(NumericError::Infinite);
        }

        let (biased, significand) = if (self.high >> 61) & 0b11 == 0b11 {
            ((self.high >> 47) & EXPONENT_MASK, 0u128)
        } else {
            let significand =
                (((self.high & SIGNIFICAND_HIGH_MASK) as u128) << 64) | self.low as u128;
            ((self.high >> 49) & EXPONENT_MASK, significand)
        };

        let significand = if significand > Self::MAX_COEFFICIENT {
            0
        } else {
            significand
        };

        let exponent = biased as i32 - Self::EXPONENT_BIAS;
        let sign = if self.is_sign_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        };
        let coefficient = BigInt::from_biguint(sign, BigUint::from(significand));

        Ok(DecimalParts::new(coefficient, exponent))
    }

    // ========================================================================
    // Encoding
    // ========================================================================

    /// Build from a decomposition.
    ///
    /// Exponents outside the format's range are clamped without changing the
    /// numeric value where possible: large exponents move digits into the
    /// coefficient, small exponents strip trailing zeros. Coefficients wider
    /// than 34 digits shed trailing zeros into the exponent.
    ///
    /// # Errors
    /// - `EncodeOverflow` if the coefficient still needs more than 34 digits
    ///   after trailing zeros are moved into the exponent
    /// - `PrecisionLoss` if the exponent is too small and the coefficient has
    ///   no trailing zeros left to strip
    pub fn from_parts(parts: &DecimalParts) -> NumericResult<Self> {
        let negative = parts.is_negative();
        Self::encode_magnitude(negative, parts.coefficient().magnitude().clone(), parts.exponent())
    }

    fn encode_magnitude(negative: bool, magnitude: BigUint, exponent: i32) -> NumericResult<Self> {
        let max_coefficient = BigUint::from(Self::MAX_COEFFICIENT);
        let ten = BigUint::from(10u8);
        let mut magnitude = magnitude;
        let mut exponent = exponent;

        if magnitude.is_zero() {
            exponent = exponent.clamp(Self::MIN_EXPONENT, Self::MAX_EXPONENT);
        }

        while exponent > Self::MAX_EXPONENT {
            magnitude *= &ten;
            exponent -= 1;
            if magnitude > max_coefficient {
                return Err(NumericError::EncodeOverflow);
            }
        }

        while exponent < Self::MIN_EXPONENT {
            let (quotient, remainder) = magnitude.div_rem(&ten);
            if !remainder.is_zero() {
                return Err(NumericError::PrecisionLoss);
            }
            magnitude = quotient;
            exponent += 1;
        }

        // Too many digits: shed trailing zeros into the exponent
        while magnitude > max_coefficient {
            let (quotient, remainder) = magnitude.div_rem(&ten);
            if !remainder.is_zero() || exponent >= Self::MAX_EXPONENT {
                return Err(NumericError::EncodeOverflow);
            }
            magnitude = quotient;
            exponent += 1;
        }

        let significand = magnitude.to_u128().ok_or(NumericError::EncodeOverflow)?;
        Ok(Self::pack(negative, significand, exponent))
    }

    /// Lay out an in-range significand and exponent as BID bits.
    fn pack(negative: bool, significand: u128, exponent: i32) -> Self {
        debug_assert!(significand <= Self::MAX_COEFFICIENT);
        debug_assert!((Self::MIN_EXPONENT..=Self::MAX_EXPONENT).contains(&exponent));

        let biased = (exponent + Self::EXPONENT_BIAS) as u64;
        let mut high = ((significand >> 64) as u64) | (biased << 49);
        if negative {
            high |= SIGN_MASK;
        }
        Self::from_bits(high, significand as u64)
    }
}

impl Default for Decimal128 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl DecimalCodec for Decimal128 {
    #[inline]
    fn decompose(&self) -> NumericResult<DecimalParts> {
        Decimal128::decompose(self)
    }

    #[inline]
    fn encode(parts: &DecimalParts) -> NumericResult<Self> {
        Self::from_parts(parts)
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
}

impl TryFrom<&DecimalParts> for Decimal128 {
    type Error = NumericError;

    fn try_from(parts: &DecimalParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl From<i64> for Decimal128 {
    /// Every `i64` has at most 19 digits, so it always fits at exponent 0.
    fn from(value: i64) -> Self {
        Self::pack(value < 0, value.unsigned_abs() as u128, 0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal128 {
    /// IEEE to-scientific-string: plain notation when the exponent is not
    /// positive and the adjusted exponent is at least -6.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_sign_negative() { "-" } else { "" };

        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_infinite() {
            return write!(f, "{}Infinity", sign);
        }

        let parts = self.decompose().map_err(|_| fmt::Error)?;
        let digits = parts.coefficient().magnitude().to_string();
        let exponent = parts.exponent() as i64;
        let adjusted = exponent + digits.len() as i64 - 1;

        if exponent <= 0 && adjusted >= -6 {
            if exponent == 0 {
                return write!(f, "{}{}", sign, digits);
            }
            let point = digits.len() as i64 + exponent;
            if point > 0 {
                let (whole, frac) = digits.split_at(point as usize);
                write!(f, "{}{}.{}", sign, whole, frac)
            } else {
                write!(f, "{}0.{:0>width$}", sign, digits, width = (-exponent) as usize)
            }
        } else {
            let (lead, rest) = digits.split_at(1);
            write!(f, "{}{}", sign, lead)?;
            if !rest.is_empty() {
                write!(f, ".{}", rest)?;
            }
            write!(f, "E{:+}", adjusted)
        }
    }
}

impl fmt::Debug for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Decimal128({}, high={:#018x}, low={:#018x})",
            self, self.high, self.low
        )
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Decimal128 {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "1.50" -> 150 × 10^-2 (trailing zeros kept)
    /// - "-0.001" -> -1 × 10^-3
    /// - "2.5E+3" -> 25 × 10^2
    /// - "NaN", "Infinity", "-Inf"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        let (negative, body) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let lowered = body.to_ascii_lowercase();
        match lowered.as_str() {
            "nan" => return Ok(Self::NAN),
            "inf" | "infinity" => {
                return Ok(if negative {
                    Self::NEG_INFINITY
                } else {
                    Self::INFINITY
                })
            }
            _ => {}
        }

        // Split off the exponent marker
        let (mantissa, exp_str) = match body.find(['e', 'E']) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        let explicit_exponent: i64 = match exp_str {
            Some(e) => e.parse().map_err(|_| NumericError::InvalidInput)?,
            None => 0,
        };

        // Split on decimal point
        let (int_str, frac_str) = match mantissa.find('.') {
            Some(pos) => (&mantissa[..pos], &mantissa[pos + 1..]),
            None => (mantissa, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().chain(frac_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidInput);
        }

        let digits = format!("{}{}", int_str, frac_str);
        let magnitude =
            BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidInput)?;

        let exponent = explicit_exponent.saturating_sub(frac_str.len() as i64);
        let exponent = if magnitude.is_zero() {
            // A zero clamps into range whatever its exponent
            exponent.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
        } else {
            i32::try_from(exponent).map_err(|_| NumericError::InvalidInput)?
        };

        Self::encode_magnitude(negative, magnitude, exponent)
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal128 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal128 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
