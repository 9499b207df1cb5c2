// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;
use std::sync::Arc;

fn main() -> Result<(), NumericError> {
    println!("=== Decimal Engine Example ===\n");

    let strict = DecimalEngine::new(EngineConfig::strict(), Arc::new(LoggingEventHandler));

    let price: Decimal128 = "19.99".parse()?;
    let quantity: Decimal128 = "3".parse()?;
    let shipping: Decimal128 = "4.5".parse()?;

    let subtotal = strict.multiply(&price, &quantity)?;
    let total = strict.add(&subtotal, &shipping)?;
    println!("{} × {} + {} = {}", price, quantity, shipping, total);

    let nickel: Decimal128 = "0.05".parse()?;
    let down = strict.round(&nickel, RoundingDirection::Down, &total)?;
    let up = strict.round(&nickel, RoundingDirection::Up, &total)?;
    println!("Rounded to {}: down {} / up {}", nickel, down, up);

    let a: Decimal128 = "630.5230005".parse()?;
    let b: Decimal128 = "630.7".parse()?;
    println!("{} vs {}: {:?}", a, b, strict.compare(&a, &b)?);

    // Lossy fallback is observable through the event handler
    println!("\nOverflow handling:");
    let big: Decimal128 = "9999999999999999999999999999999999".parse()?;
    let two: Decimal128 = "2".parse()?;

    match strict.add(&big, &two) {
        Ok(v) => println!("  strict: {}", v),
        Err(e) => println!("  strict: error: {}", e),
    }

    let recorder = Arc::new(RecordingEventHandler::new());
    let compatible = DecimalEngine::new(EngineConfig::compatible(), recorder.clone());
    let fallback = compatible.add(&big, &two)?;
    println!("  compatible: {} (fallback seen: {})", fallback, recorder.saw_fallback());

    Ok(())
}
