//! Runtime settings for the bot.
//!
//! Values come from `ENCORE__*` environment variables (optionally seeded from
//! a `.env` file). Nested keys are joined with `__`, so
//! `ENCORE__FEATURES__VERBOSE_ERRORS=true` sets `features.verbose_errors`.
//!
//! ```no_run
//! use encore::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("support: {}", config.bot.support_server_url);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bot;
mod embed;
mod error;
mod features;
mod logging;

pub use bot::BotConfig;
pub use embed::{EmbedColors, EmbedConfig, EmbedIcons};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// All settings. Each section defaults, so an empty environment is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Bot identity and support links
    #[serde(default)]
    pub bot: BotConfig,

    /// Response colors and icons
    #[serde(default)]
    pub embed: EmbedConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Reads `.env` if present, then the `ENCORE__` environment.
    ///
    /// # Errors
    ///
    /// `LoadError` when a variable cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = config::Environment::with_prefix("ENCORE")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true);

        Ok(config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize::<AppConfig>()?)
    }

    /// Checks every section, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// The `ValidationError` of the first section that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot.validate()?;
        self.embed.validate()?;
        self.logging.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    const VARS: [&str; 4] = [
        "ENCORE__BOT__SUPPORT_SERVER_URL",
        "ENCORE__FEATURES__SERIALIZE_SESSION_COMMANDS",
        "ENCORE__EMBED__COLORS__ERROR",
        "ENCORE__LOGGING__FORMAT",
    ];

    // Process environment is shared between test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn scrubbed_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        VARS.iter().for_each(|var| env::remove_var(var));
        guard
    }

    #[test]
    fn defaults_load_and_validate() {
        let _env = scrubbed_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.bot.name, "Encore");
        assert!(config.features.serialize_session_commands);
        config.validate().unwrap();
    }

    #[test]
    fn nested_variables_override_sections() {
        let _env = scrubbed_env();
        env::set_var("ENCORE__BOT__SUPPORT_SERVER_URL", "https://support.example.com");
        env::set_var("ENCORE__FEATURES__SERIALIZE_SESSION_COMMANDS", "false");
        env::set_var("ENCORE__EMBED__COLORS__ERROR", "16711680");
        env::set_var("ENCORE__LOGGING__FORMAT", "json");

        let loaded = AppConfig::load();
        VARS.iter().for_each(|var| env::remove_var(var));
        let config = loaded.unwrap();

        assert_eq!(config.bot.support_server_url, "https://support.example.com");
        assert!(!config.features.serialize_session_commands);
        assert_eq!(config.embed.colors.error, 0xFF0000);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn plain_http_support_url_is_rejected() {
        let mut config = AppConfig::default();
        config.bot.support_server_url = "ftp://nowhere".to_string();

        assert_eq!(config.validate(), Err(ValidationError::SupportUrlMustBeHttps));
    }
}
