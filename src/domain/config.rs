// ============================================================================
// Engine Configuration
// Overflow, range-check and exponent-bound policies for the decimal engine
// ============================================================================

use crate::domain::Operation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Overflow Policy
// ============================================================================

/// What an arithmetic operation does when its result cannot be re-encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Return the codec's zero value instead of failing
    /// - Lossy: an unexpected zero must be treated as a magnitude problem
    /// - An `EncodeFallback` event is emitted and a warning logged
    /// - Use case: behavioural compatibility with existing ledgers
    ZeroFallback,

    /// Surface the encode error to the caller
    #[default]
    Propagate,
}

// ============================================================================
// Range Check Scope
// ============================================================================

/// Which operations validate operand exponents before computing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangeCheck {
    /// Only Add and Subtract validate operands
    AdditiveOnly,

    /// Add, Subtract, Multiply and Round validate operands
    #[default]
    AllArithmetic,
}

impl RangeCheck {
    /// Whether `operation` validates its operands under this scope.
    /// Compare never does.
    pub const fn applies_to(self, operation: Operation) -> bool {
        match (self, operation) {
            (_, Operation::Compare) => false,
            (RangeCheck::AdditiveOnly, op) => op.is_additive(),
            (RangeCheck::AllArithmetic, _) => true,
        }
    }
}

// ============================================================================
// Exponent Bounds
// ============================================================================

/// Inclusive range of operand exponents accepted by validating operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExponentBounds {
    pub min: i32,
    pub max: i32,
}

impl ExponentBounds {
    pub const DEFAULT_MIN: i32 = -323;
    pub const DEFAULT_MAX: i32 = 308;

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub const fn contains(&self, exponent: i32) -> bool {
        exponent >= self.min && exponent <= self.max
    }
}

impl Default for ExponentBounds {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

// ============================================================================
// Complete Engine Configuration
// ============================================================================

/// Configuration for a [`DecimalEngine`](crate::engine::DecimalEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// Behaviour when a result cannot be re-encoded
    pub overflow_policy: OverflowPolicy,

    /// Operations that validate operand exponents up front
    pub range_check: RangeCheck,

    /// Accepted operand exponent range
    pub exponent_bounds: ExponentBounds,
}

impl EngineConfig {
    /// Create a new configuration with explicit policies and default bounds
    pub fn new(overflow_policy: OverflowPolicy, range_check: RangeCheck) -> Self {
        Self {
            overflow_policy,
            range_check,
            exponent_bounds: ExponentBounds::default(),
        }
    }

    /// Builder method: Set the overflow policy
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Builder method: Set the range check scope
    pub fn with_range_check(mut self, range_check: RangeCheck) -> Self {
        self.range_check = range_check;
        self
    }

    /// Builder method: Set the accepted exponent range
    pub fn with_exponent_bounds(mut self, min: i32, max: i32) -> Self {
        self.exponent_bounds = ExponentBounds::new(min, max);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.exponent_bounds.min > self.exponent_bounds.max {
            return Err(format!(
                "Exponent bounds are inverted: min {} > max {}",
                self.exponent_bounds.min, self.exponent_bounds.max
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl EngineConfig {
    /// Strict configuration (the default)
    /// - Encode failures are returned as errors
    /// - Every arithmetic operation validates operand exponents
    pub fn strict() -> Self {
        Self::new(OverflowPolicy::Propagate, RangeCheck::AllArithmetic)
    }

    /// Compatibility configuration
    /// - Encode failures degrade to the zero value
    /// - Only Add and Subtract validate operand exponents
    pub fn compatible() -> Self {
        Self::new(OverflowPolicy::ZeroFallback, RangeCheck::AdditiveOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = EngineConfig::default();
        assert_eq!(config, EngineConfig::strict());
        assert_eq!(config.exponent_bounds, ExponentBounds::new(-323, 308));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::compatible().with_exponent_bounds(-10, 10);

        assert_eq!(config.overflow_policy, OverflowPolicy::ZeroFallback);
        assert_eq!(config.range_check, RangeCheck::AdditiveOnly);
        assert!(config.exponent_bounds.contains(-10));
        assert!(!config.exponent_bounds.contains(11));
    }

    #[test]
    fn test_validation() {
        let config = EngineConfig::strict().with_exponent_bounds(5, -5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_range_check_scope() {
        assert!(RangeCheck::AdditiveOnly.applies_to(Operation::Add));
        assert!(RangeCheck::AdditiveOnly.applies_to(Operation::Subtract));
        assert!(!RangeCheck::AdditiveOnly.applies_to(Operation::Multiply));
        assert!(!RangeCheck::AdditiveOnly.applies_to(Operation::Round));

        assert!(RangeCheck::AllArithmetic.applies_to(Operation::Multiply));
        assert!(RangeCheck::AllArithmetic.applies_to(Operation::Round));
        assert!(!RangeCheck::AllArithmetic.applies_to(Operation::Compare));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = EngineConfig::compatible().with_exponent_bounds(-28, 28);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
