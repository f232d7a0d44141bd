//! Encore - validated command pipeline for voice-channel playback sessions.
//!
//! Every inbound command is checked against live voice and queue state by an
//! ordered validator chain, executed against the guild's queue state machine,
//! and answered with exactly one structured response carrying a correlation
//! identifier.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
