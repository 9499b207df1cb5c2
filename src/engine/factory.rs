// ============================================================================
// Decimal Engine Factory
// Creates decimal engines from validated configuration
// ============================================================================

use crate::domain::config::{EngineConfig, ExponentBounds, OverflowPolicy, RangeCheck};
use crate::engine::DecimalEngine;
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a decimal engine from configuration
///
/// # Arguments
/// * `config` - Engine configuration
/// * `event_handler` - Handler for rejected-operand and fallback events
///
/// # Returns
/// * `Result<DecimalEngine, String>` - Configured engine or validation error
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use std::sync::Arc;
///
/// let config = EngineConfig::compatible();
/// let engine = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(engine.config().overflow_policy, OverflowPolicy::ZeroFallback);
/// ```
pub fn create_from_config(
    config: EngineConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<DecimalEngine, String> {
    config.validate()?;

    tracing::debug!(?config, "creating decimal engine");
    Ok(DecimalEngine::new(config, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating decimal engines with fluent API
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
/// use std::sync::Arc;
///
/// let engine = DecimalEngineBuilder::new()
///     .zero_fallback()
///     .validate_all_arithmetic()
///     .with_exponent_bounds(-28, 28)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecimalEngineBuilder {
    config: EngineConfig,
}

impl DecimalEngineBuilder {
    /// Create a new builder starting from the strict configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Overflow Policy
    // ========================================================================

    /// Return the zero value when a result cannot be re-encoded
    pub fn zero_fallback(mut self) -> Self {
        self.config.overflow_policy = OverflowPolicy::ZeroFallback;
        self
    }

    /// Return the encode error when a result cannot be re-encoded (default)
    pub fn propagate_overflow(mut self) -> Self {
        self.config.overflow_policy = OverflowPolicy::Propagate;
        self
    }

    // ========================================================================
    // Range Checking
    // ========================================================================

    /// Validate operand exponents for Add and Subtract only
    pub fn validate_additive_only(mut self) -> Self {
        self.config.range_check = RangeCheck::AdditiveOnly;
        self
    }

    /// Validate operand exponents for every arithmetic operation (default)
    pub fn validate_all_arithmetic(mut self) -> Self {
        self.config.range_check = RangeCheck::AllArithmetic;
        self
    }

    /// Set the accepted operand exponent range
    pub fn with_exponent_bounds(mut self, min: i32, max: i32) -> Self {
        self.config.exponent_bounds = ExponentBounds::new(min, max);
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Start from the strict preset
    pub fn strict() -> Self {
        Self {
            config: EngineConfig::strict(),
        }
    }

    /// Start from the compatibility preset
    pub fn compatible() -> Self {
        Self {
            config: EngineConfig::compatible(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the decimal engine
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<DecimalEngine, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &EngineConfig {
        &self.config
    }
}
