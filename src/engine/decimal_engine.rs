// ============================================================================
// Decimal Engine
// Decompose, validate, compute, re-encode
// ============================================================================

use super::arithmetic;
use super::compare::compare_parts;
use crate::domain::{DecimalParts, EngineConfig, Operation, OverflowPolicy, RoundingDirection};
use crate::interfaces::{DecimalCodec, EngineEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{NumericError, NumericResult};
use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;

/// Stateless decimal arithmetic over any [`DecimalCodec`].
///
/// Every operation decomposes its operands, optionally validates their
/// exponents, computes on the coefficient/exponent pairs and re-encodes a
/// fresh value. Operands are never modified. The engine holds only its
/// configuration and an event handler, so a single instance can be shared
/// across threads.
///
/// # Example
/// ```
/// use decimal_engine::prelude::*;
///
/// let engine = DecimalEngine::default();
/// let a: Decimal128 = "1.5".parse().unwrap();
/// let b: Decimal128 = "0.25".parse().unwrap();
///
/// let total = engine.add(&a, &b).unwrap();
/// assert_eq!(total.to_string(), "1.75");
///
/// let nickel: Decimal128 = "0.05".parse().unwrap();
/// let price: Decimal128 = "1.23".parse().unwrap();
/// let rounded = engine.round(&nickel, RoundingDirection::Up, &price).unwrap();
/// assert_eq!(rounded.to_string(), "1.25");
/// ```
pub struct DecimalEngine {
    /// Overflow, range-check and bounds policy
    config: EngineConfig,

    /// Receives rejected-operand and zero-fallback notifications
    event_handler: Arc<dyn EventHandler>,
}

impl DecimalEngine {
    /// Create a new decimal engine
    pub fn new(config: EngineConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Engine that propagates encode errors and validates every arithmetic
    /// operation's operands.
    pub fn strict() -> Self {
        Self::new(EngineConfig::strict(), Arc::new(NoOpEventHandler))
    }

    /// Engine that falls back to zero on encode errors and validates only
    /// Add/Subtract operands.
    pub fn compatible() -> Self {
        Self::new(EngineConfig::compatible(), Arc::new(NoOpEventHandler))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The zero value of codec `C`, also the fallback result under
    /// [`OverflowPolicy::ZeroFallback`].
    #[inline]
    pub fn zero<C: DecimalCodec>() -> C {
        C::zero()
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// `a + b`, expressed at the finer of the two exponents.
    ///
    /// # Errors
    /// - decode errors from either operand
    /// - `OutOfRange` if an exponent is outside the configured bounds
    /// - encode errors under [`OverflowPolicy::Propagate`]
    pub fn add<C: DecimalCodec>(&self, a: &C, b: &C) -> NumericResult<C> {
        let (lhs, rhs) = self.operands(Operation::Add, a, b)?;
        let sum = arithmetic::sum(&lhs, &rhs);
        self.encode(Operation::Add, &sum)
    }

    /// `a - b`, expressed at the finer of the two exponents.
    ///
    /// # Errors
    /// Same as [`add`](Self::add).
    pub fn subtract<C: DecimalCodec>(&self, a: &C, b: &C) -> NumericResult<C> {
        let (lhs, rhs) = self.operands(Operation::Subtract, a, b)?;
        let difference = arithmetic::difference(&lhs, &rhs);
        self.encode(Operation::Subtract, &difference)
    }

    /// `a × b`, exponent is the sum of the operand exponents.
    ///
    /// # Errors
    /// - decode errors from either operand
    /// - `OutOfRange` when the range check covers all arithmetic
    /// - encode errors under [`OverflowPolicy::Propagate`]
    pub fn multiply<C: DecimalCodec>(&self, a: &C, b: &C) -> NumericResult<C> {
        let (lhs, rhs) = self.operands(Operation::Multiply, a, b)?;
        let product = arithmetic::product(&lhs, &rhs);
        self.encode(Operation::Multiply, &product)
    }

    /// Round `value` onto the grid of multiples of `unit`.
    ///
    /// A zero `unit` disables rounding: `value` is returned without being
    /// decoded. Values already on the grid are returned unchanged.
    ///
    /// # Errors
    /// - decode errors from `unit`, or from `value` when rounding is enabled
    /// - `OutOfRange` when the range check covers all arithmetic
    /// - encode errors under [`OverflowPolicy::Propagate`]
    pub fn round<C: DecimalCodec>(
        &self,
        unit: &C,
        direction: RoundingDirection,
        value: &C,
    ) -> NumericResult<C> {
        let unit_parts = unit.decompose()?;
        if unit_parts.is_zero() {
            return Ok(value.clone());
        }

        let value_parts = value.decompose()?;
        self.check_range(Operation::Round, &unit_parts)?;
        self.check_range(Operation::Round, &value_parts)?;

        let rounded = arithmetic::round_to_unit(&unit_parts, direction, &value_parts);
        if rounded == value_parts {
            return Ok(value.clone());
        }

        self.encode(Operation::Round, &rounded)
    }

    /// Numeric ordering of `a` and `b`, independent of their scales.
    ///
    /// # Errors
    /// Decode errors from either operand. Exponents are never range-checked.
    pub fn compare<C: DecimalCodec>(&self, a: &C, b: &C) -> NumericResult<Ordering> {
        let (lhs, rhs) = self.operands(Operation::Compare, a, b)?;
        Ok(compare_parts(&lhs, &rhs))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn operands<C: DecimalCodec>(
        &self,
        operation: Operation,
        a: &C,
        b: &C,
    ) -> NumericResult<(DecimalParts, DecimalParts)> {
        let lhs = a.decompose()?;
        let rhs = b.decompose()?;
        self.check_range(operation, &lhs)?;
        self.check_range(operation, &rhs)?;

        tracing::trace!(%operation, %lhs, %rhs, "operands decomposed");
        Ok((lhs, rhs))
    }

    fn check_range(&self, operation: Operation, parts: &DecimalParts) -> NumericResult<()> {
        if !self.config.range_check.applies_to(operation) {
            return Ok(());
        }

        let bounds = self.config.exponent_bounds;
        let exponent = parts.exponent();
        if bounds.contains(exponent) {
            return Ok(());
        }

        tracing::debug!(
            %operation,
            exponent,
            min = bounds.min,
            max = bounds.max,
            "operand exponent out of range"
        );
        self.event_handler.on_event(EngineEvent::OperandRejected {
            operation,
            exponent,
            timestamp: Utc::now(),
        });

        Err(NumericError::OutOfRange {
            exponent,
            min: bounds.min,
            max: bounds.max,
        })
    }

    fn encode<C: DecimalCodec>(&self, operation: Operation, parts: &DecimalParts) -> NumericResult<C> {
        let error = match C::encode(parts) {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        match self.config.overflow_policy {
            OverflowPolicy::ZeroFallback if error.is_encode_error() => {
                tracing::warn!(
                    %operation,
                    result = %parts,
                    %error,
                    "result not representable, returning zero"
                );
                self.event_handler.on_event(EngineEvent::EncodeFallback {
                    operation,
                    coefficient: parts.coefficient().clone(),
                    exponent: parts.exponent(),
                    reason: error,
                    timestamp: Utc::now(),
                });
                Ok(C::zero())
            }
            _ => Err(error),
        }
    }
}

impl Default for DecimalEngine {
    fn default() -> Self {
        Self::strict()
    }
}

impl std::fmt::Debug for DecimalEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecimalEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RangeCheck;
    use crate::interfaces::RecordingEventHandler;
    use crate::numeric::Decimal128;

    fn dec(s: &str) -> Decimal128 {
        s.parse().unwrap()
    }

    fn recording(config: EngineConfig) -> (DecimalEngine, Arc<RecordingEventHandler>) {
        let handler = Arc::new(RecordingEventHandler::new());
        (DecimalEngine::new(config, handler.clone()), handler)
    }

    #[test]
    fn test_add() {
        let engine = DecimalEngine::default();
        assert_eq!(engine.add(&dec("1.5"), &dec("0.25")).unwrap(), dec("1.75"));
        assert_eq!(engine.add(&dec("100"), &dec("0.001")).unwrap(), dec("100.001"));
        assert_eq!(engine.add(&dec("-3"), &dec("3")).unwrap().to_string(), "0");
    }

    #[test]
    fn test_subtract() {
        let engine = DecimalEngine::default();
        assert_eq!(engine.subtract(&dec("1"), &dec("0.25")).unwrap(), dec("0.75"));
        assert_eq!(engine.subtract(&dec("0.25"), &dec("1")).unwrap(), dec("-0.75"));
    }

    #[test]
    fn test_multiply() {
        let engine = DecimalEngine::default();
        assert_eq!(engine.multiply(&dec("1.5"), &dec("0.25")).unwrap(), dec("0.375"));
        assert_eq!(engine.multiply(&dec("-2E+3"), &dec("4")).unwrap(), dec("-8E+3"));
    }

    #[test]
    fn test_round() {
        let engine = DecimalEngine::default();
        let nickel = dec("0.05");
        assert_eq!(
            engine.round(&nickel, RoundingDirection::Down, &dec("1.23")).unwrap(),
            dec("1.20")
        );
        assert_eq!(
            engine.round(&nickel, RoundingDirection::Up, &dec("1.23")).unwrap(),
            dec("1.25")
        );
    }

    #[test]
    fn test_round_zero_unit_skips_decoding() {
        let engine = DecimalEngine::default();
        let nan = Decimal128::NAN;
        let result = engine.round(&Decimal128::ZERO, RoundingDirection::Up, &nan).unwrap();
        assert!(result.is_nan());

        // Any zero-valued unit disables rounding, not only the canonical one
        let value = dec("1.2345");
        assert_eq!(
            engine.round(&dec("0.00"), RoundingDirection::Up, &value).unwrap(),
            value
        );
    }

    #[test]
    fn test_round_on_boundary_returns_value() {
        let engine = DecimalEngine::default();
        let value = dec("1.2");
        let result = engine.round(&dec("0.05"), RoundingDirection::Up, &value).unwrap();
        assert_eq!(result, value);
    }

    #[test]
    fn test_compare() {
        let engine = DecimalEngine::default();
        assert_eq!(engine.compare(&dec("1.50"), &dec("1.5")).unwrap(), Ordering::Equal);
        assert_eq!(
            engine.compare(&dec("630.5230005"), &dec("630.7")).unwrap(),
            Ordering::Less
        );
        assert_eq!(engine.compare(&dec("-1"), &dec("0")).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_decode_errors_propagate() {
        let engine = DecimalEngine::compatible();
        let one = dec("1");
        assert_eq!(engine.add(&Decimal128::NAN, &one), Err(NumericError::NotANumber));
        assert_eq!(
            engine.multiply(&one, &Decimal128::INFINITY),
            Err(NumericError::Infinite)
        );
        assert_eq!(
            engine.compare(&Decimal128::NEG_INFINITY, &one),
            Err(NumericError::Infinite)
        );
        assert_eq!(
            engine.round(&dec("0.05"), RoundingDirection::Up, &Decimal128::NAN),
            Err(NumericError::NotANumber)
        );
    }

    #[test]
    fn test_out_of_range_add() {
        let (engine, handler) = recording(EngineConfig::compatible());
        let result = engine.add(&dec("1E-400"), &dec("1"));
        assert_eq!(
            result,
            Err(NumericError::OutOfRange {
                exponent: -400,
                min: -323,
                max: 308
            })
        );
        assert!(matches!(
            handler.events()[0],
            EngineEvent::OperandRejected {
                operation: Operation::Add,
                exponent: -400,
                ..
            }
        ));

        assert!(engine.subtract(&dec("1"), &dec("1E+309")).is_err());
        assert!(engine.add(&dec("1E-323"), &dec("1E+308")).is_ok());
    }

    #[test]
    fn test_range_check_scope() {
        let compatible = DecimalEngine::compatible();
        let strict = DecimalEngine::strict();
        let tiny = dec("1E-400");
        let one = dec("1");

        // Multiply and Round are only guarded when the scope covers them
        assert_eq!(compatible.multiply(&tiny, &one).unwrap(), tiny);
        assert!(matches!(
            strict.multiply(&tiny, &one),
            Err(NumericError::OutOfRange { .. })
        ));
        assert!(matches!(
            strict.round(&dec("0.01"), RoundingDirection::Down, &tiny),
            Err(NumericError::OutOfRange { .. })
        ));

        // Compare is never guarded
        assert_eq!(strict.compare(&tiny, &one).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_encode_overflow_propagates() {
        let engine = DecimalEngine::strict();
        let big = dec("9999999999999999999999999999999999");
        assert_eq!(engine.add(&big, &dec("2")), Err(NumericError::EncodeOverflow));
        assert_eq!(engine.multiply(&big, &big), Err(NumericError::EncodeOverflow));
    }

    #[test]
    fn test_wide_exact_results_encode() {
        let (engine, handler) = recording(EngineConfig::strict());
        let big = dec("9999999999999999999999999999999999");

        // 35 digits, but the trailing zeros move into the exponent
        let sum = engine.add(&big, &dec("1")).unwrap();
        assert_eq!(engine.compare(&sum, &dec("1E+34")).unwrap(), Ordering::Equal);

        let quintillion = dec("1000000000000000000");
        let product = engine.multiply(&quintillion, &quintillion).unwrap();
        assert_eq!(engine.compare(&product, &dec("1E+36")).unwrap(), Ordering::Equal);

        assert!(handler.is_empty());
    }

    #[test]
    fn test_encode_overflow_falls_back_to_zero() {
        let (engine, handler) = recording(EngineConfig::compatible());
        let big = dec("9999999999999999999999999999999999");

        let sum = engine.add(&big, &dec("2")).unwrap();
        assert_eq!(sum, Decimal128::ZERO);

        let product = engine.multiply(&big, &big).unwrap();
        assert_eq!(product, Decimal128::ZERO);

        let events = handler.drain();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            EngineEvent::EncodeFallback {
                operation: Operation::Add,
                reason: NumericError::EncodeOverflow,
                ..
            }
        ));
        assert_eq!(events[1].operation(), Operation::Multiply);
    }

    #[test]
    fn test_round_up_past_largest_coefficient() {
        let config = EngineConfig::compatible().with_range_check(RangeCheck::AllArithmetic);
        let (engine, handler) = recording(config);
        let value = dec("9999999999999999999999999999999999");
        let unit = dec("1E+1");

        let rounded = engine.round(&unit, RoundingDirection::Up, &value).unwrap();
        assert_eq!(engine.compare(&rounded, &dec("1E+34")).unwrap(), Ordering::Equal);
        assert!(!handler.saw_fallback());
    }

    #[test]
    fn test_round_fallback_to_zero() {
        // Next multiple of 0.07 needs 35 digits with no trailing zero
        let config = EngineConfig::compatible().with_range_check(RangeCheck::AllArithmetic);
        let (engine, handler) = recording(config);
        let value = dec("99999999999999999999999999999999.99");
        let unit = dec("0.07");

        let rounded = engine.round(&unit, RoundingDirection::Up, &value).unwrap();
        assert_eq!(rounded, Decimal128::ZERO);
        assert!(handler.saw_fallback());

        assert_eq!(
            DecimalEngine::strict().round(&unit, RoundingDirection::Up, &value),
            Err(NumericError::EncodeOverflow)
        );
    }

    #[test]
    fn test_operands_not_mutated() {
        let engine = DecimalEngine::default();
        let a = dec("12.5");
        let b = dec("0.125");
        let _ = engine.add(&a, &b).unwrap();
        let _ = engine.subtract(&a, &b).unwrap();
        let _ = engine.multiply(&a, &b).unwrap();
        let _ = engine.compare(&a, &b).unwrap();
        assert_eq!(a, dec("12.5"));
        assert_eq!(b, dec("0.125"));
    }

    #[test]
    fn test_works_with_rust_decimal() {
        use rust_decimal::Decimal;

        let engine = DecimalEngine::default();
        let a = Decimal::new(150, 2);
        let b = Decimal::new(15, 1);
        assert_eq!(engine.compare(&a, &b).unwrap(), Ordering::Equal);
        assert_eq!(engine.add(&a, &b).unwrap(), Decimal::new(300, 2));
        assert_eq!(
            engine
                .round(&Decimal::new(5, 2), RoundingDirection::Up, &Decimal::new(123, 2))
                .unwrap(),
            Decimal::new(125, 2)
        );

        // 10^34 at scale 32 is too wide for 96 bits until its zeros are shed
        let ten = Decimal::new(100_000_000_000_000_000, 16);
        assert_eq!(engine.multiply(&ten, &ten).unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_zero() {
        assert_eq!(DecimalEngine::zero::<Decimal128>(), Decimal128::ZERO);
    }
}
