//! Application layer - the command pipeline and its handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Nothing in
//! here knows which transport delivered a command or where the response goes.

pub mod handlers;
pub mod lifecycle;
pub mod pipeline;
pub mod queue_machine;
pub mod response;

pub use handlers::{CommandHandler, LeaveHandler, LoopHandler};
pub use lifecycle::{PlaybackEnd, SessionLifecycle};
pub use pipeline::{CommandPipeline, InboundCommand, SessionLocks};
pub use response::ResponseEmitter;
