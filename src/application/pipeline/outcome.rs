//! Outcome - the terminal result of one command.

use crate::domain::response::ResponseKind;

/// Icon role; the emitter resolves it against the configured icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Error,
    Loop,
    Looping,
    Autoplay,
    Autoplaying,
}

/// Classification plus user-facing text of a finished command.
///
/// Exactly one outcome is produced per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub kind: ResponseKind,
    pub icon: Icon,
    pub title: String,
    pub message: String,
    /// Show the caller as the response author.
    pub show_author: bool,
    /// Internal error detail, only rendered when verbose errors are enabled.
    pub detail: Option<String>,
}

impl Outcome {
    fn new(kind: ResponseKind, icon: Icon, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            icon,
            title: title.into(),
            message: message.into(),
            show_author: false,
            detail: None,
        }
    }

    pub fn success(icon: Icon, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ResponseKind::Success, icon, title, message)
    }

    pub fn info(icon: Icon, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ResponseKind::Info, icon, title, message)
    }

    /// Caller-caused rejection or no-op conflict.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ResponseKind::Warning, Icon::Warning, "Oops!", message)
    }

    /// Unexpected failure; the emitter adds the correlation footer.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ResponseKind::Error, Icon::Error, title, message)
    }

    /// Fallback for failures with no command-specific wording.
    pub fn unexpected(command: &str) -> Self {
        Self::error(
            "Uh-oh... Something went wrong!",
            format!(
                "There was an unexpected error while trying to perform **`/{}`**.\n\nYou can try to perform the command again.",
                command
            ),
        )
    }

    pub fn with_author(mut self) -> Self {
        self.show_author = true;
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_uses_warning_icon_and_title() {
        let outcome = Outcome::warning("Loop mode is already **`track`**.");
        assert_eq!(outcome.kind, ResponseKind::Warning);
        assert_eq!(outcome.icon, Icon::Warning);
        assert_eq!(outcome.title, "Oops!");
        assert!(!outcome.show_author);
    }

    #[test]
    fn unexpected_names_the_command() {
        let outcome = Outcome::unexpected("leave");
        assert_eq!(outcome.kind, ResponseKind::Error);
        assert!(outcome.message.contains("/leave"));
    }
}
