//! Command infrastructure shared by every handler.
//!
//! `CommandMetadata` is the identity of one inbound command invocation: which
//! command, who called it, in which guild, and the correlation identifier that
//! ties every log line and the final response together.

use serde::{Deserialize, Serialize};

use super::{CorrelationId, GuildId, Timestamp, UserId};

/// Metadata context for one command invocation.
///
/// Built once at the transport boundary and never persisted beyond the
/// command's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Command name as registered with the pipeline (e.g. `leave`).
    pub command: String,

    /// The guild this command targets; also the session key.
    pub guild_id: GuildId,

    /// The user executing this command.
    pub user_id: UserId,

    /// Links every log line and the response of this invocation.
    correlation_id: CorrelationId,

    /// When the pipeline accepted the command.
    received_at: Timestamp,

    /// Source of this command (e.g. "gateway", "console").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates metadata with a fresh correlation identifier.
    pub fn new(command: impl Into<String>, guild_id: GuildId, user_id: UserId) -> Self {
        Self {
            command: command.into(),
            guild_id,
            user_id,
            correlation_id: CorrelationId::new(),
            received_at: Timestamp::now(),
            source: None,
        }
    }

    /// Builder: reuse a correlation identifier supplied by the transport.
    pub fn with_correlation_id(mut self, id: CorrelationId) -> Self {
        self.correlation_id = id;
        self
    }

    /// Tags where the command came from, such as `console`.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn correlation_id(&self) -> CorrelationId {
        self.correlation_id
    }

    pub fn received_at(&self) -> &Timestamp {
        &self.received_at
    }

    /// Origin tag, when one was attached.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture for the given command name.
    pub fn test_fixture(command: &str) -> Self {
        Self::new(
            command,
            GuildId::new(1).unwrap(),
            UserId::new(100).unwrap(),
        )
        .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generates_correlation_id() {
        let a = CommandMetadata::test_fixture("leave");
        let b = CommandMetadata::test_fixture("leave");

        assert_ne!(a.correlation_id(), b.correlation_id());
    }

    #[test]
    fn correlation_id_is_stable_for_one_invocation() {
        let metadata = CommandMetadata::test_fixture("loop");
        assert_eq!(metadata.correlation_id(), metadata.correlation_id());
    }

    #[test]
    fn with_correlation_id_overrides_generated_value() {
        let id = CorrelationId::new();
        let metadata = CommandMetadata::test_fixture("loop").with_correlation_id(id);
        assert_eq!(metadata.correlation_id(), id);
    }

    #[test]
    fn serialization_skips_none_source() {
        let metadata = CommandMetadata::new(
            "leave",
            GuildId::new(5).unwrap(),
            UserId::new(6).unwrap(),
        );

        let json = serde_json::to_string(&metadata).unwrap();

        assert!(json.contains("correlation_id"));
        assert!(!json.contains("source"));
    }
}
