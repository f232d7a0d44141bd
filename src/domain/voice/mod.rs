//! Voice domain module.
//!
//! Who is calling and where they are connected.

mod caller;

pub use caller::Caller;
