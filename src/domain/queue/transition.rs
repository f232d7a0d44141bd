//! Results of queue state machine transitions.

use serde::Serialize;

use super::RepeatMode;

/// What happened when a repeat mode change was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum RepeatModeTransition {
    /// The target was already active; nothing was changed.
    Unchanged { current: RepeatMode },

    /// The engine applied the change and the read-back confirmed it.
    Applied { from: RepeatMode, to: RepeatMode },

    /// The engine accepted the change but the read-back shows another mode.
    Mismatch {
        from: RepeatMode,
        requested: RepeatMode,
        observed: RepeatMode,
    },
}

/// What happened when a queue deletion was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Deletion {
    Deleted,
    AlreadyDeleted,
}
