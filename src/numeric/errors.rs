// ============================================================================
// Numeric Errors
// Error taxonomy for decomposition, range validation and re-encoding
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while decomposing, validating or re-encoding
/// decimal values.
///
/// The variants fall into three families:
/// - decode errors ([`NotANumber`](Self::NotANumber),
///   [`Infinite`](Self::Infinite), [`InvalidInput`](Self::InvalidInput)):
///   an operand could not be turned into a coefficient/exponent pair
/// - [`OutOfRange`](Self::OutOfRange): an operand's exponent is outside the
///   bounds the engine accepts
/// - encode errors ([`EncodeOverflow`](Self::EncodeOverflow),
///   [`PrecisionLoss`](Self::PrecisionLoss)): a computed result does not fit
///   the interchange format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericError {
    /// Operand is a NaN and has no coefficient/exponent decomposition
    NotANumber,
    /// Operand is positive or negative infinity
    Infinite,
    /// Input string or value is invalid
    InvalidInput,
    /// Operand exponent outside the accepted range
    OutOfRange { exponent: i32, min: i32, max: i32 },
    /// Coefficient too large for the interchange format
    EncodeOverflow,
    /// Result would need rounding to fit the interchange format's exponent range
    PrecisionLoss,
}

impl NumericError {
    /// True for failures raised while re-encoding a computed result.
    #[inline]
    pub const fn is_encode_error(&self) -> bool {
        matches!(self, NumericError::EncodeOverflow | NumericError::PrecisionLoss)
    }
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NotANumber => write!(f, "decode error: value is NaN"),
            NumericError::Infinite => write!(f, "decode error: value is infinite"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::OutOfRange { exponent, min, max } => write!(
                f,
                "exponent out of range: {} is outside [{}, {}]",
                exponent, min, max
            ),
            NumericError::EncodeOverflow => write!(
                f,
                "encode overflow: magnitude too large for interchange format"
            ),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: exponent too small for interchange format"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
