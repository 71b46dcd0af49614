//! Configuration module for the kiosk bot.
//!
//! Loads configuration from environment variables.

use std::env;

use thiserror::Error;

/// Default port for the liveness server.
const DEFAULT_PORT: u16 = 3000;

/// Startup configuration errors.
///
/// All of these are fatal: the process reports them and exits with a
/// non-zero status before opening any network connection.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN environment variable is not set")]
    MissingToken,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token.
    pub bot_token: String,

    /// Port the liveness server listens on.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let bot_token = env::var("BOT_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse()?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { bot_token, port })
    }
}
