//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! command pipeline and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - guild → live queue lookup, owned by the playback engine
//! - `GuildQueue` - mutation and read surface of one live queue
//! - `VoiceStateReader` - voice channel membership of members and the bot
//! - `ResponsePresenter` - delivery of the structured reply

mod guild_queue;
mod response_presenter;
mod session_registry;
mod voice_state;

pub use guild_queue::GuildQueue;
pub use response_presenter::ResponsePresenter;
pub use session_registry::SessionRegistry;
pub use voice_state::VoiceStateReader;
