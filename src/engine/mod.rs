// ============================================================================
// Engine Module
// Scale alignment, the arithmetic algorithms and the engine façade
// ============================================================================

mod align;
mod arithmetic;
mod compare;
mod decimal_engine;

pub mod factory;

pub use align::{align, pow10, rescale, Aligned};
pub use arithmetic::{difference, product, round_to_unit, sum};
pub use compare::compare_parts;
pub use decimal_engine::DecimalEngine;
pub use factory::{create_from_config, DecimalEngineBuilder};
