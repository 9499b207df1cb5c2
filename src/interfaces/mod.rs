// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod codec;
mod event_handler;

pub use codec::DecimalCodec;
pub use event_handler::{
    EngineEvent, EventHandler, LoggingEventHandler, NoOpEventHandler, RecordingEventHandler,
};
