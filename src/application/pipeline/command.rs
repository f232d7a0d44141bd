//! Inbound command contract.
//!
//! Option types are coerced by the transport before the command reaches the
//! pipeline; this module only reads them back.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::CommandError;
use crate::domain::foundation::GuildId;
use crate::domain::voice::Caller;

/// A primitive option value as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

/// Named options of one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandOptions(HashMap<String, OptionValue>);

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set an option.
    pub fn with(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.0.get(name)
    }

    /// Reads an optional integer option.
    ///
    /// # Errors
    ///
    /// - `InvalidOption` if the option is present with another type
    pub fn integer(&self, name: &str) -> Result<Option<i64>, CommandError> {
        match self.0.get(name) {
            None => Ok(None),
            Some(OptionValue::Integer(value)) => Ok(Some(*value)),
            Some(other) => Err(CommandError::invalid_option(
                name,
                format!("expected an integer, got {:?}", other),
            )),
        }
    }
}

/// A command as handed over by the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundCommand {
    pub name: String,

    #[serde(default)]
    pub options: CommandOptions,

    pub caller: Caller,

    /// Session key.
    pub guild_id: GuildId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl InboundCommand {
    pub fn new(name: impl Into<String>, guild_id: GuildId, caller: Caller) -> Self {
        Self {
            name: name.into(),
            options: CommandOptions::new(),
            caller,
            guild_id,
            source: None,
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options = self.options.with(name, value);
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_reads_absent_and_present_values() {
        let options = CommandOptions::new().with("mode", OptionValue::Integer(2));

        assert_eq!(options.integer("mode").unwrap(), Some(2));
        assert_eq!(options.integer("other").unwrap(), None);
    }

    #[test]
    fn integer_rejects_other_types() {
        let options = CommandOptions::new().with("mode", OptionValue::String("2".into()));

        let err = options.integer("mode").unwrap_err();
        assert!(err.is_caller_error());
    }

    #[test]
    fn deserializes_transport_json() {
        let json = r#"{
            "name": "loop",
            "options": {"mode": 1},
            "caller": {"user_id": 5, "display_name": "dj", "voice_channel": 77},
            "guild_id": 9
        }"#;

        let command: InboundCommand = serde_json::from_str(json).unwrap();

        assert_eq!(command.name, "loop");
        assert_eq!(command.options.get("mode"), Some(&OptionValue::Integer(1)));
        assert_eq!(command.guild_id.get(), 9);
        assert!(command.source.is_none());
    }

    #[test]
    fn options_default_to_empty() {
        let json = r#"{
            "name": "leave",
            "caller": {"user_id": 5, "display_name": "dj"},
            "guild_id": 9
        }"#;

        let command: InboundCommand = serde_json::from_str(json).unwrap();
        assert_eq!(command.options, CommandOptions::new());
    }
}
