// ============================================================================
// Decimal Engine Library
// Exact fixed-point decimal arithmetic over coefficient/exponent pairs
// ============================================================================

//! # Decimal Engine
//!
//! Exact addition, subtraction, multiplication, comparison and directional
//! rounding for decimal quantities, suitable for monetary computation where
//! binary floating point is unacceptable.
//!
//! Every value is handled as `coefficient × 10^exponent` with an
//! arbitrary-precision coefficient. Interchange formats plug in through the
//! [`DecimalCodec`](interfaces::DecimalCodec) trait; a decimal128 codec and a
//! `rust_decimal::Decimal` codec ship with the crate.
//!
//! ## Features
//!
//! - **Precision-preserving alignment**: sums keep the finer of the two scales
//! - **Grid rounding**: round up or down to any caller-supplied unit
//! - **Scale-independent ordering**: `1.50` compares equal to `1.5`
//! - **Explicit overflow policy**: propagate encode errors or fall back to zero
//!   with an observable event
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//! use std::cmp::Ordering;
//!
//! let engine = DecimalEngine::default();
//!
//! let price: Decimal128 = "19.99".parse().unwrap();
//! let quantity: Decimal128 = "3".parse().unwrap();
//! let total = engine.multiply(&price, &quantity).unwrap();
//! assert_eq!(total.to_string(), "59.97");
//!
//! let nickel: Decimal128 = "0.05".parse().unwrap();
//! let cash = engine.round(&nickel, RoundingDirection::Up, &total).unwrap();
//! assert_eq!(cash.to_string(), "60.00");
//!
//! let a: Decimal128 = "1.50".parse().unwrap();
//! let b: Decimal128 = "1.5".parse().unwrap();
//! assert_eq!(engine.compare(&a, &b).unwrap(), Ordering::Equal);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DecimalParts, EngineConfig, ExponentBounds, Operation, OverflowPolicy, RangeCheck,
        RoundingDirection,
    };
    pub use crate::engine::{create_from_config, DecimalEngine, DecimalEngineBuilder};
    pub use crate::interfaces::{
        DecimalCodec, EngineEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
        RecordingEventHandler,
    };
    pub use crate::numeric::{Decimal128, NumericError, NumericResult};
}
