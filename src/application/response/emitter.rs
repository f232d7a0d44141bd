//! ResponseEmitter - renders outcomes into responses.
//!
//! Rendering cannot fail from the caller's point of view: when an outcome
//! does not fit the response limits, the failure is logged and a minimal
//! fallback response carrying the correlation id is returned instead.

use thiserror::Error;
use tracing::error;

use crate::application::pipeline::{CorrelationContext, Icon, Outcome};
use crate::config::{AppConfig, EmbedConfig};
use crate::domain::response::{execution_footer, Response, ResponseAuthor, ResponseKind};

/// Upper bound on a rendered title, in characters.
pub const MAX_TITLE_LEN: usize = 256;

/// Upper bound on a rendered body, in characters.
pub const MAX_BODY_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Response title is empty")]
    EmptyTitle,

    #[error("Response title has {0} characters, limit is {MAX_TITLE_LEN}")]
    TitleTooLong(usize),

    #[error("Response body has {0} characters, limit is {MAX_BODY_LEN}")]
    BodyTooLong(usize),
}

/// Turns an `Outcome` into the channel-agnostic `Response`.
#[derive(Debug, Clone)]
pub struct ResponseEmitter {
    embed: EmbedConfig,
    support_server_url: String,
    verbose_errors: bool,
}

impl ResponseEmitter {
    pub fn new(embed: EmbedConfig, support_server_url: impl Into<String>) -> Self {
        Self {
            embed,
            support_server_url: support_server_url.into(),
            verbose_errors: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.embed.clone(), config.bot.support_server_url.clone())
            .with_verbose_errors(config.features.verbose_errors)
    }

    /// Builder: render internal error detail into error bodies.
    pub fn with_verbose_errors(mut self, enabled: bool) -> Self {
        self.verbose_errors = enabled;
        self
    }

    /// Renders `outcome` for the invocation in `ctx`. Never fails.
    pub fn emit(&self, outcome: &Outcome, ctx: &CorrelationContext) -> Response {
        match self.render(outcome, ctx) {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, kind = %outcome.kind, "Failed to render response, using fallback.");
                Response::fallback(ctx.correlation_id())
            }
        }
    }

    /// Renders without the fallback.
    ///
    /// # Errors
    ///
    /// - `EmptyTitle` if the outcome has no title
    /// - `TitleTooLong` or `BodyTooLong` if the rendered text exceeds the limits
    pub fn render(&self, outcome: &Outcome, ctx: &CorrelationContext) -> Result<Response, RenderError> {
        if outcome.title.trim().is_empty() {
            return Err(RenderError::EmptyTitle);
        }

        let title = format!("{} {}", self.icon(outcome.icon), outcome.title);
        let title_len = title.chars().count();
        if title_len > MAX_TITLE_LEN {
            return Err(RenderError::TitleTooLong(title_len));
        }

        let is_error = outcome.kind == ResponseKind::Error;
        let body = self.body(outcome, is_error);
        let body_len = body.chars().count();
        if body_len > MAX_BODY_LEN {
            return Err(RenderError::BodyTooLong(body_len));
        }

        let correlation_id = ctx.correlation_id();
        Ok(Response {
            kind: outcome.kind,
            title,
            body,
            color: self.color(outcome.kind),
            footer: is_error.then(|| execution_footer(correlation_id)),
            author: outcome.show_author.then(|| ResponseAuthor {
                name: ctx.caller().display_name.clone(),
                icon_url: ctx.caller().avatar_url.clone(),
            }),
            correlation_id,
        })
    }

    fn body(&self, outcome: &Outcome, is_error: bool) -> String {
        let mut body = outcome.message.clone();
        if !is_error {
            return body;
        }
        if self.verbose_errors {
            if let Some(detail) = &outcome.detail {
                body.push_str(&format!("\n\n```\n{}\n```", detail));
            }
        }
        body.push_str(&format!(
            "\n\n_If you think this message is incorrect or the issue persists, please submit a bug report in the **[support server]({})**._",
            self.support_server_url
        ));
        body
    }

    fn color(&self, kind: ResponseKind) -> u32 {
        let colors = &self.embed.colors;
        match kind {
            ResponseKind::Success => colors.success,
            ResponseKind::Info => colors.info,
            ResponseKind::Warning => colors.warning,
            ResponseKind::Error => colors.error,
        }
    }

    fn icon(&self, icon: Icon) -> &str {
        let icons = &self.embed.icons;
        match icon {
            Icon::Success => &icons.success,
            Icon::Warning => &icons.warning,
            Icon::Error => &icons.error,
            Icon::Loop => &icons.r#loop,
            Icon::Looping => &icons.looping,
            Icon::Autoplay => &icons.autoplay,
            Icon::Autoplaying => &icons.autoplaying,
        }
    }
}
