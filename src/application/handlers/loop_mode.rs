//! LoopHandler - reads or changes the guild queue's repeat mode.

use async_trait::async_trait;
use tracing::{debug, info};

use super::CommandHandler;
use crate::application::pipeline::{CommandError, CorrelationContext, Icon, Outcome};
use crate::application::queue_machine;
use crate::domain::queue::{RepeatMode, RepeatModeTransition};

/// Name of the integer selector option.
pub const MODE_OPTION: &str = "mode";

/// Without a `mode` option, reports the current mode. With one, switches to
/// it and only claims success once the engine's read-back agrees.
#[derive(Debug, Default)]
pub struct LoopHandler;

impl LoopHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandHandler for LoopHandler {
    fn name(&self) -> &'static str {
        "loop"
    }

    async fn handle(&self, ctx: &CorrelationContext) -> Result<Outcome, CommandError> {
        let selector = ctx.options().integer(MODE_OPTION)?;
        let queue = ctx.session()?;

        let Some(selector) = selector else {
            debug!("No mode provided, responding with current loop mode.");
            let current = queue.repeat_mode().await?;
            return Ok(current_mode(current));
        };

        let target = RepeatMode::from_selector(selector)
            .map_err(|err| CommandError::from_validation(MODE_OPTION, err))?;

        let transition = queue_machine::set_repeat_mode(queue.as_ref(), target).await?;
        Ok(match transition {
            RepeatModeTransition::Unchanged { current } => {
                debug!(mode = %current, "Loop mode already set.");
                Outcome::warning(format!("Loop mode is already **`{}`**.", current))
            }
            RepeatModeTransition::Mismatch { requested, .. } => Outcome::error(
                "Uh-oh... Failed to change loop mode!",
                format!(
                    "I tried to change the loop mode to **`{}`**, but something went wrong.\n\nYou can try to perform the command again.",
                    requested
                ),
            )
            .with_detail(format!("{:?}", transition)),
            RepeatModeTransition::Applied { from, to } => {
                info!(from = %from, to = %to, "Loop mode changed.");
                changed(from, to)
            }
        })
    }
}

fn current_mode(current: RepeatMode) -> Outcome {
    let icon = if current == RepeatMode::Autoplay {
        Icon::Autoplay
    } else {
        Icon::Loop
    };
    Outcome::info(
        icon,
        "Current loop mode",
        format!("The looping mode is currently set to **`{}`**.", current),
    )
}

fn changed(from: RepeatMode, to: RepeatMode) -> Outcome {
    let summary = format!("Changing loop mode from **`{}`** to **`{}`**.", from, to);

    let outcome = match (from, to) {
        (RepeatMode::Autoplay, RepeatMode::Disabled) => Outcome::success(
            Icon::Success,
            "Autoplay disabled",
            format!(
                "{}\n\nSimilar tracks will no longer start playing when the queue is empty!",
                summary
            ),
        ),
        (_, RepeatMode::Disabled) => Outcome::success(
            Icon::Success,
            "Loop mode disabled",
            format!("{}\n\nThe {} will no longer play on repeat!", summary, from),
        ),
        (_, RepeatMode::Autoplay) => Outcome::success(
            Icon::Autoplaying,
            "Loop mode changed",
            format!(
                "{}\n\nWhen the queue is empty, similar tracks will start playing!",
                summary
            ),
        ),
        (_, to) => Outcome::success(
            Icon::Looping,
            "Loop mode changed",
            format!("{}\n\nThe {} will now play on repeat!", summary, to),
        ),
    };
    outcome.with_author()
}
