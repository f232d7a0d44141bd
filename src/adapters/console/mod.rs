//! Console transport.
//!
//! Development harness: newline-delimited JSON events in, one JSON line per
//! response or lifecycle result out.

mod events;
mod presenter;
mod runner;

pub use events::{ConsoleEvent, ConsoleOutput, PlaybackResult};
pub use presenter::JsonLinesPresenter;
pub use runner::{ConsoleError, ConsoleRunner};
