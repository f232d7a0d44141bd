//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Support server URL must use HTTPS")]
    SupportUrlMustBeHttps,

    #[error("Color '{0}' does not fit in 24 bits")]
    ColorOutOfRange(&'static str),

    #[error("Log filter directive is empty")]
    EmptyLogFilter,
}
