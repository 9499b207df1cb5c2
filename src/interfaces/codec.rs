// ============================================================================
// Decimal Codec Interface
// Defines the contract between the engine and an interchange format
// ============================================================================

use crate::domain::DecimalParts;
use crate::numeric::NumericResult;

/// Conversion between an interchange representation and its
/// coefficient/exponent decomposition.
///
/// Implementations must invert each other on the values they produce:
/// `Self::encode(&v.decompose()?)` yields `v` again for any `v` that
/// `encode` returned.
pub trait DecimalCodec: Clone + Sized {
    /// Split a value into `coefficient × 10^exponent`.
    ///
    /// # Errors
    /// A decode error (`NotANumber`, `Infinite`, `InvalidInput`) when the
    /// value has no finite decomposition.
    fn decompose(&self) -> NumericResult<DecimalParts>;

    /// Build a value from a decomposition.
    ///
    /// # Errors
    /// `EncodeOverflow` or `PrecisionLoss` when the format cannot hold it.
    fn encode(parts: &DecimalParts) -> NumericResult<Self>;

    /// The canonical zero, equivalent to decoding `"0"`.
    fn zero() -> Self;
}
