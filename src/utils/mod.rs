// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the arithmetic itself
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
