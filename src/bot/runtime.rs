//! Bot runtime - long polling runner.

use teloxide::prelude::*;
use tracing::info;

use super::dispatcher::ThrottledBot;

/// Run the bot with long polling until shutdown.
///
/// Polling and connection errors are logged by the update listener, which
/// also owns reconnection; per-event failures never reach this level.
pub async fn run(
    mut dispatcher: Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey>,
) {
    info!("Starting bot in polling mode...");
    dispatcher.dispatch().await;
}
