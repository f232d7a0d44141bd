//! Bot identity configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Who the bot is and where callers report problems.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name used in log lines and the console harness
    #[serde(default = "default_name")]
    pub name: String,

    /// Invite link to the support server, quoted in error responses
    #[serde(default = "default_support_server_url")]
    pub support_server_url: String,
}

impl BotConfig {
    /// Validate bot configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("bot.name"));
        }
        if !self.support_server_url.starts_with("https://") {
            return Err(ValidationError::SupportUrlMustBeHttps);
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            support_server_url: default_support_server_url(),
        }
    }
}

fn default_name() -> String {
    "Encore".to_string()
}

fn default_support_server_url() -> String {
    "https://discord.gg/encore".to_string()
}
