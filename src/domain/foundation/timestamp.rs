//! UTC instants attached to inbound commands.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// `self - earlier`; negative when `earlier` is actually later.
    pub fn since(&self, earlier: &Timestamp) -> Duration {
        self.0 - earlier.0
    }

    /// Wall time since this instant in milliseconds, never below zero.
    pub fn elapsed_ms(&self) -> i64 {
        Self::now().since(self).num_milliseconds().max(0)
    }
}
