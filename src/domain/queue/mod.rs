//! Queue domain module.
//!
//! The per-guild playback queue: pending tracks, the repeat mode state
//! machine and the one-way deletion flag.

mod errors;
mod repeat_mode;
mod state;
mod track;
mod transition;

pub use errors::QueueError;
pub use repeat_mode::RepeatMode;
pub use state::QueueState;
pub use track::Track;
pub use transition::{Deletion, RepeatModeTransition};
