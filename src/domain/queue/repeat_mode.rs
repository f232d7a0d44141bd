//! RepeatMode enum: what the player does when the current track ends.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Continuation policy of a guild queue. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    #[default]
    Disabled,
    TrackRepeat,
    QueueRepeat,
    Autoplay,
}

impl RepeatMode {
    /// Every mode, in selector order.
    pub const ALL: [RepeatMode; 4] = [
        RepeatMode::Disabled,
        RepeatMode::TrackRepeat,
        RepeatMode::QueueRepeat,
        RepeatMode::Autoplay,
    ];

    /// Parses the pre-coerced integer selector sent with the `loop` command.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the selector is not 0 to 3
    pub fn from_selector(selector: i64) -> Result<Self, ValidationError> {
        match selector {
            0 => Ok(RepeatMode::Disabled),
            1 => Ok(RepeatMode::TrackRepeat),
            2 => Ok(RepeatMode::QueueRepeat),
            3 => Ok(RepeatMode::Autoplay),
            other => Err(ValidationError::out_of_range("mode", 0, 3, other)),
        }
    }

    /// The integer selector for this mode.
    pub fn selector(&self) -> u8 {
        match self {
            RepeatMode::Disabled => 0,
            RepeatMode::TrackRepeat => 1,
            RepeatMode::QueueRepeat => 2,
            RepeatMode::Autoplay => 3,
        }
    }

    /// User-facing name of the mode.
    pub fn label(&self) -> &'static str {
        match self {
            RepeatMode::Disabled => "disabled",
            RepeatMode::TrackRepeat => "track",
            RepeatMode::QueueRepeat => "queue",
            RepeatMode::Autoplay => "autoplay",
        }
    }

    /// Returns true if the session keeps playing once the queue runs dry.
    pub fn continues_playback(&self) -> bool {
        !matches!(self, RepeatMode::Disabled)
    }
}

impl StateMachine for RepeatMode {
    fn can_transition_to(&self, target: &Self) -> bool {
        self != target
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
