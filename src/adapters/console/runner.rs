//! Line-driven harness over the in-memory adapters.

use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};
use tracing::{debug, warn};

use super::{ConsoleEvent, ConsoleOutput, JsonLinesPresenter};
use crate::adapters::memory::{InMemoryGuildQueue, InMemorySessionRegistry, InMemoryVoiceStates};
use crate::application::{CommandPipeline, ResponseEmitter, SessionLifecycle, SessionLocks};
use crate::config::AppConfig;
use crate::domain::foundation::DomainError;
use crate::domain::queue::RepeatMode;
use crate::ports::GuildQueue;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed event: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Applies console events to the pipeline and writes the results.
pub struct ConsoleRunner<W> {
    pipeline: CommandPipeline,
    lifecycle: SessionLifecycle,
    voice: InMemoryVoiceStates,
    presenter: JsonLinesPresenter<W>,
}

impl<W: AsyncWrite + Unpin + Send + 'static> ConsoleRunner<W> {
    /// Wires the pipeline and lifecycle to fresh in-memory adapters.
    pub fn new(config: &AppConfig, out: W) -> Self {
        let registry = InMemorySessionRegistry::new();
        let voice = InMemoryVoiceStates::new();
        let presenter = JsonLinesPresenter::new(out);

        let mut pipeline = CommandPipeline::standard(
            Arc::new(registry.clone()),
            Arc::new(voice.clone()),
            Arc::new(presenter.clone()),
            ResponseEmitter::from_config(config),
        );
        let mut lifecycle = SessionLifecycle::new(Arc::new(registry));

        if config.features.serialize_session_commands {
            let locks = SessionLocks::new();
            pipeline = pipeline.with_session_locks(locks.clone());
            lifecycle = lifecycle.with_session_locks(locks);
        }

        Self {
            pipeline,
            lifecycle,
            voice,
            presenter,
        }
    }

    pub fn presenter(&self) -> &JsonLinesPresenter<W> {
        &self.presenter
    }

    /// Reads events until EOF. Malformed or failing lines are reported as
    /// `error` outputs and do not stop the loop.
    ///
    /// # Errors
    ///
    /// - `Io` if reading the input fails
    /// - `Domain` if the output cannot be written
    pub async fn run<R: AsyncBufRead + Unpin>(&self, input: R) -> Result<(), ConsoleError> {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Err(err) = self.handle_line(line).await {
                warn!(error = %err, "Failed to handle console event.");
                self.presenter
                    .write(&ConsoleOutput::Error {
                        message: err.to_string(),
                        correlation_id: None,
                    })
                    .await?;
            }
        }
        debug!("Console input closed.");
        Ok(())
    }

    /// Applies one input line.
    ///
    /// # Errors
    ///
    /// - `Parse` if the line is not a known event
    /// - `Domain` if the lifecycle rejects the event
    pub async fn handle_line(&self, line: &str) -> Result<(), ConsoleError> {
        let event: ConsoleEvent = serde_json::from_str(line)?;
        self.apply(event).await
    }

    async fn apply(&self, event: ConsoleEvent) -> Result<(), ConsoleError> {
        match event {
            ConsoleEvent::VoiceState {
                guild_id,
                user_id: Some(user_id),
                channel_id,
            } => self.voice.set_member(guild_id, user_id, channel_id).await,
            ConsoleEvent::VoiceState {
                guild_id,
                user_id: None,
                channel_id,
            } => self.voice.set_bot(guild_id, channel_id).await,
            ConsoleEvent::OpenSession {
                guild_id,
                channel_id,
                tracks,
                repeat_mode,
            } => {
                let queue =
                    InMemoryGuildQueue::new(guild_id, channel_id).with_voice_states(self.voice.clone());
                for track in tracks {
                    queue.enqueue(track).await?;
                }
                if repeat_mode != RepeatMode::Disabled {
                    queue.set_repeat_mode(repeat_mode).await?;
                }
                self.lifecycle.open(Arc::new(queue)).await?;
                self.voice.set_bot(guild_id, Some(channel_id)).await;
                self.presenter
                    .write(&ConsoleOutput::SessionOpened {
                        guild_id,
                        channel_id,
                    })
                    .await?;
            }
            ConsoleEvent::PlaybackFinished { guild_id } => {
                let end = self.lifecycle.on_playback_finished(guild_id).await?;
                self.presenter
                    .write(&ConsoleOutput::PlaybackFinished {
                        guild_id,
                        result: end.into(),
                    })
                    .await?;
            }
            ConsoleEvent::Command(command) => {
                let command = match command.source {
                    Some(_) => command,
                    None => command.with_source("console"),
                };
                self.pipeline.execute(command).await;
            }
        }
        Ok(())
    }
}
