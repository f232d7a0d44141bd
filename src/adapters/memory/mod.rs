//! In-memory adapters.
//!
//! Deterministic implementations of every port, used by tests and by the
//! console harness.

mod guild_queue;
mod presenter;
mod session_registry;
mod voice_states;

pub use guild_queue::{EngineFault, InMemoryGuildQueue};
pub use presenter::RecordingPresenter;
pub use session_registry::InMemorySessionRegistry;
pub use voice_states::InMemoryVoiceStates;
