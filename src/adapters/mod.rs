//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory registry, queues and voice state
//! - `console` - JSON-lines transport for local runs

pub mod console;
pub mod memory;

pub use console::{ConsoleRunner, JsonLinesPresenter};
pub use memory::{InMemoryGuildQueue, InMemorySessionRegistry, InMemoryVoiceStates, RecordingPresenter};
