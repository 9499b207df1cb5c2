// ============================================================================
// Logging Initialisation
// tracing-subscriber setup for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a formatted `tracing` subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already installed, which is
/// harmless when several tests or demos race to initialise logging.
pub fn init_logging(max_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let _ = init_logging(Level::DEBUG);
        // A second subscriber is refused rather than panicking
        assert!(!init_logging(Level::TRACE));
    }
}
