//! Behavior toggles read from `ENCORE__FEATURES__*`.

use serde::Deserialize;

/// Switches that change pipeline behavior without a rebuild.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Hold a per-guild lock across validate → mutate → respond
    #[serde(default = "default_serialize_session_commands")]
    pub serialize_session_commands: bool,

    /// Include internal error detail in error responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            serialize_session_commands: default_serialize_session_commands(),
            verbose_errors: false,
        }
    }
}

fn default_serialize_session_commands() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialization_on_and_verbose_errors_off_by_default() {
        let flags = FeatureFlags::default();
        assert!(flags.serialize_session_commands);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn both_flags_deserialize() {
        let json = r#"{
            "serialize_session_commands": false,
            "verbose_errors": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.serialize_session_commands);
        assert!(flags.verbose_errors);
    }

    #[test]
    fn empty_object_uses_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.serialize_session_commands);
    }
}
