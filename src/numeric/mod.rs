// ============================================================================
// Numeric Module
// Interchange codecs and the error taxonomy for decimal arithmetic
// ============================================================================
//
// This module provides:
// - Decimal128: IEEE 754-2008 decimal128 value (BID layout, BSON wire order)
// - DecimalCodec for rust_decimal::Decimal
// - NumericError: Decode, range and encode errors
//
// Design principles:
// - No floating-point operations
// - All fallible conversions return Result (no panics)
// - Coefficients are arbitrary precision while in flight

mod decimal;
mod decimal128;
mod errors;

pub use decimal128::Decimal128;
pub use errors::{NumericError, NumericResult};
