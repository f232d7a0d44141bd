//! CommandPipeline - routes one inbound command to exactly one response.
//!
//! Flow per invocation:
//! 1. Mint a correlation id and open a span carrying it
//! 2. Take the session lock (when enabled)
//! 3. Look up the session and build the correlation context
//! 4. Run the handler's validator chain; the first failure becomes a warning
//! 5. Run the handler
//! 6. Render the outcome and hand it to the presenter
//!
//! Steps 3 to 5 share one panic boundary; rendering and presenting each
//! have their own. A panic anywhere still yields an error response.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, info_span, warn, Instrument};

use super::{
    CommandError, CommandOptions, CorrelationContext, InboundCommand, Outcome, SessionLocks,
    ValidationScope,
};
use crate::application::handlers::{CommandHandler, LeaveHandler, LoopHandler};
use crate::application::response::ResponseEmitter;
use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode};
use crate::domain::response::Response;
use crate::ports::{ResponsePresenter, SessionRegistry, VoiceStateReader};

/// Entry point for every command the transport delivers.
pub struct CommandPipeline {
    registry: Arc<dyn SessionRegistry>,
    voice: Arc<dyn VoiceStateReader>,
    presenter: Arc<dyn ResponsePresenter>,
    emitter: ResponseEmitter,
    handlers: HashMap<&'static str, Arc<dyn CommandHandler>>,
    locks: Option<SessionLocks>,
}

impl CommandPipeline {
    /// A pipeline with no handlers and no session locks.
    pub fn new(
        registry: Arc<dyn SessionRegistry>,
        voice: Arc<dyn VoiceStateReader>,
        presenter: Arc<dyn ResponsePresenter>,
        emitter: ResponseEmitter,
    ) -> Self {
        Self {
            registry,
            voice,
            presenter,
            emitter,
            handlers: HashMap::new(),
            locks: None,
        }
    }

    /// A pipeline serving `leave` and `loop`.
    pub fn standard(
        registry: Arc<dyn SessionRegistry>,
        voice: Arc<dyn VoiceStateReader>,
        presenter: Arc<dyn ResponsePresenter>,
        emitter: ResponseEmitter,
    ) -> Self {
        Self::new(registry, voice, presenter, emitter)
            .with_handler(Arc::new(LeaveHandler::new()))
            .with_handler(Arc::new(LoopHandler::new()))
    }

    /// Builder: register a handler under its name, replacing any previous one.
    pub fn with_handler(mut self, handler: Arc<dyn CommandHandler>) -> Self {
        self.handlers.insert(handler.name(), handler);
        self
    }

    /// Builder: serialize commands per guild.
    pub fn with_session_locks(mut self, locks: SessionLocks) -> Self {
        self.locks = Some(locks);
        self
    }

    pub fn commands(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Runs one command to completion and returns the response that was
    /// handed to the presenter. Never fails.
    pub async fn execute(&self, command: InboundCommand) -> Response {
        let mut metadata =
            CommandMetadata::new(&command.name, command.guild_id, command.caller.user_id);
        if let Some(source) = &command.source {
            metadata = metadata.with_source(source.clone());
        }

        let span = info_span!(
            "command",
            command = %metadata.command,
            correlation_id = %metadata.correlation_id(),
            guild_id = %metadata.guild_id,
            user_id = %metadata.user_id,
        );
        self.run(metadata, command).instrument(span).await
    }

    async fn run(&self, metadata: CommandMetadata, command: InboundCommand) -> Response {
        info!(source = metadata.source().unwrap_or("unknown"), "Command received.");

        let session_guard = match &self.locks {
            Some(locks) => Some(locks.acquire(metadata.guild_id).await),
            None => None,
        };

        let bare = CorrelationContext::new(
            metadata.clone(),
            command.caller.clone(),
            None,
            CommandOptions::new(),
        );
        let (ctx, outcome) = match AssertUnwindSafe(self.resolve(metadata, command))
            .catch_unwind()
            .await
        {
            Ok(resolved) => resolved,
            Err(panic) => {
                let outcome = panicked(&bare, "command", panic.as_ref());
                (bare, outcome)
            }
        };

        let response = std::panic::catch_unwind(AssertUnwindSafe(|| self.emitter.emit(&outcome, &ctx)))
            .unwrap_or_else(|panic| {
                error!(panic = %panic_message(panic.as_ref()), "Response emitter panicked.");
                Response::fallback(ctx.correlation_id())
            });

        match AssertUnwindSafe(self.presenter.present(ctx.metadata(), &response))
            .catch_unwind()
            .await
        {
            Ok(Ok(())) => {}
            Ok(Err(err)) => warn!(error = %err, "Failed to deliver response."),
            Err(panic) => error!(panic = %panic_message(panic.as_ref()), "Response presenter panicked."),
        }

        drop(session_guard);
        if let Some(locks) = &self.locks {
            let tracked = locks.prune().await;
            debug!(tracked, "Pruned idle session locks.");
        }

        info!(
            kind = %response.kind,
            elapsed_ms = ctx.metadata().received_at().elapsed_ms(),
            "Command completed."
        );
        response
    }

    /// Looks up the session and decides the outcome.
    async fn resolve(
        &self,
        metadata: CommandMetadata,
        command: InboundCommand,
    ) -> (CorrelationContext, Outcome) {
        let (session, lookup_error) = match self.registry.get(metadata.guild_id).await {
            Ok(session) => (session, None),
            Err(err) => (None, Some(err)),
        };

        let ctx = CorrelationContext::new(metadata, command.caller, session, command.options);

        let outcome = match lookup_error {
            Some(err) => self.failure(&ctx, err.into()),
            None => self.dispatch(&ctx).await,
        };
        (ctx, outcome)
    }

    async fn dispatch(&self, ctx: &CorrelationContext) -> Outcome {
        let Some(handler) = self.handlers.get(ctx.command()) else {
            let err = DomainError::new(
                ErrorCode::UnknownCommand,
                format!("No handler registered for '{}'", ctx.command()),
            );
            return self.failure(ctx, err.into());
        };

        let scope = ValidationScope {
            context: ctx,
            voice: self.voice.as_ref(),
            registry: self.registry.as_ref(),
        };
        match handler.validators().run(&scope).await {
            Ok(None) => info!("Validation passed, running handler."),
            Ok(Some(reason)) => return reason.into(),
            Err(err) => return self.failure(ctx, err.into()),
        }

        match AssertUnwindSafe(handler.handle(ctx)).catch_unwind().await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => self.failure(ctx, err),
            Err(panic) => panicked(ctx, "handler", panic.as_ref()),
        }
    }

    fn failure(&self, ctx: &CorrelationContext, err: CommandError) -> Outcome {
        match err {
            CommandError::InvalidOption { name, reason } => {
                warn!(option = %name, reason = %reason, "Invalid command option.");
                Outcome::warning(format!("The **`{}`** option is invalid. {}", name, reason))
            }
            other => {
                error!(error = %other, code = %other.code(), "Command failed unexpectedly.");
                Outcome::unexpected(ctx.command()).with_detail(other.to_string())
            }
        }
    }
}

fn panicked(ctx: &CorrelationContext, stage: &str, panic: &(dyn Any + Send)) -> Outcome {
    let message = panic_message(panic);
    error!(stage, panic = %message, "Command panicked.");
    Outcome::unexpected(ctx.command()).with_detail(format!("{} panicked: {}", stage, message))
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
