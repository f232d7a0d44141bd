//! Response rendering.

mod emitter;

pub use emitter::{RenderError, ResponseEmitter, MAX_BODY_LEN, MAX_TITLE_LEN};
