//! Strongly-typed identifier value objects.
//!
//! Guild, channel and user identifiers are gateway snowflakes: opaque, non-zero
//! 64-bit integers. Correlation identifiers are generated locally per command.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Declares a snowflake-backed identifier newtype.
macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates the identifier, rejecting the zero snowflake.
            pub fn new(id: u64) -> Result<Self, ValidationError> {
                if id == 0 {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the raw snowflake.
            pub fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }
    };
}

snowflake_id!(
    /// Identifier of a guild. Doubles as the session key: one session per guild.
    GuildId,
    "guild_id"
);

snowflake_id!(
    /// Identifier of a voice channel.
    ChannelId,
    "channel_id"
);

snowflake_id!(
    /// Identifier of a user (the caller or the bot itself).
    UserId,
    "user_id"
);

/// Opaque token attached to one command invocation for its whole lifecycle.
///
/// Shown to the caller on error responses so they can quote it when reporting
/// an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Creates a new random CorrelationId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CorrelationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
