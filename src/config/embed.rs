//! Response styling configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Colors and icons used when rendering responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedConfig {
    #[serde(default)]
    pub colors: EmbedColors,

    #[serde(default)]
    pub icons: EmbedIcons,
}

/// 24-bit RGB color per severity
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedColors {
    #[serde(default = "default_success")]
    pub success: u32,
    #[serde(default = "default_info")]
    pub info: u32,
    #[serde(default = "default_warning")]
    pub warning: u32,
    #[serde(default = "default_error")]
    pub error: u32,
}

/// Icons prefixed to response titles
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedIcons {
    #[serde(default = "default_icon_success")]
    pub success: String,
    #[serde(default = "default_icon_warning")]
    pub warning: String,
    #[serde(default = "default_icon_error")]
    pub error: String,
    #[serde(default = "default_icon_loop")]
    pub r#loop: String,
    #[serde(default = "default_icon_looping")]
    pub looping: String,
    #[serde(default = "default_icon_autoplay")]
    pub autoplay: String,
    #[serde(default = "default_icon_autoplaying")]
    pub autoplaying: String,
}

impl EmbedConfig {
    /// Validate colors fit in 24 bits
    pub fn validate(&self) -> Result<(), ValidationError> {
        let colors = [
            ("success", self.colors.success),
            ("info", self.colors.info),
            ("warning", self.colors.warning),
            ("error", self.colors.error),
        ];
        for (name, value) in colors {
            if value > 0xFF_FF_FF {
                return Err(ValidationError::ColorOutOfRange(name));
            }
        }
        Ok(())
    }
}

impl Default for EmbedColors {
    fn default() -> Self {
        Self {
            success: default_success(),
            info: default_info(),
            warning: default_warning(),
            error: default_error(),
        }
    }
}

impl Default for EmbedIcons {
    fn default() -> Self {
        Self {
            success: default_icon_success(),
            warning: default_icon_warning(),
            error: default_icon_error(),
            r#loop: default_icon_loop(),
            looping: default_icon_looping(),
            autoplay: default_icon_autoplay(),
            autoplaying: default_icon_autoplaying(),
        }
    }
}

fn default_success() -> u32 {
    0x2ECC71 // Green
}

fn default_info() -> u32 {
    0x3498DB // Blue
}

fn default_warning() -> u32 {
    0xF1C40F // Yellow
}

fn default_error() -> u32 {
    0xE74C3C // Red
}

fn default_icon_success() -> String {
    "✅".to_string()
}

fn default_icon_warning() -> String {
    "⚠️".to_string()
}

fn default_icon_error() -> String {
    "❌".to_string()
}

fn default_icon_loop() -> String {
    "🔁".to_string()
}

fn default_icon_looping() -> String {
    "🔁".to_string()
}

fn default_icon_autoplay() -> String {
    "♾️".to_string()
}

fn default_icon_autoplaying() -> String {
    "♾️".to_string()
}
