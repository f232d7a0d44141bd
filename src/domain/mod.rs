//! Domain layer - Core business logic and entities.
//!
//! Pure types and rules with no knowledge of the gateway, the playback
//! engine or how replies are rendered.

pub mod foundation;
pub mod queue;
pub mod response;
pub mod voice;
