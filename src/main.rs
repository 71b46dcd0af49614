//! Kiosk - a small Telegram menu bot.
//!
//! Presents a fixed menu of commands, reply-keyboard buttons, and inline
//! buttons, and answers each input with a canned response.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `rules` - Pure event-to-action dispatch tables
//! - `menus` - Canned screen texts and keyboards
//! - `bot` - Telegram wiring (with Throttle for API rate limiting)
//! - `server` - Liveness endpoint for the hosting platform

mod bot;
mod config;
mod menus;
mod rules;
mod server;

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use rules::RuleSet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("kiosk=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting kiosk bot...");

    // Load configuration; a missing token aborts here, before any connection
    let config = Config::from_env()?;
    info!("Configuration loaded successfully");

    // Liveness endpoint for the hosting platform
    server::spawn(config.port).await?;

    // Initialize bot with Throttle for automatic rate limiting
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    // Get bot info
    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    // Dispatch rules are built once and shared read-only
    let rules = Arc::new(RuleSet::new());

    let dispatcher = bot::build_dispatcher(bot, rules);

    // Run the bot
    bot::run(dispatcher).await;

    Ok(())
}
