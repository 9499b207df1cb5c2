// ============================================================================
// Domain Models Module
// Value objects shared by the codecs and the arithmetic engine
// ============================================================================

pub mod config;
pub mod operation;
pub mod parts;
pub mod rounding;

pub use config::{EngineConfig, ExponentBounds, OverflowPolicy, RangeCheck};
pub use operation::Operation;
pub use parts::DecimalParts;
pub use rounding::RoundingDirection;
