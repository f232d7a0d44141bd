use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::info;

use encore::adapters::ConsoleRunner;
use encore::config::AppConfig;
use encore::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    telemetry::init_logging(&config.logging).context("Failed to initialize logging")?;
    info!(
        bot = %config.bot.name,
        serialize_session_commands = config.features.serialize_session_commands,
        "Starting console transport."
    );

    let runner = ConsoleRunner::new(&config, tokio::io::stdout());
    runner
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("Console transport failed")?;

    info!("Input closed, shutting down.");
    Ok(())
}
