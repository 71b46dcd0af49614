//! Liveness server.
//!
//! Minimal HTTP surface for the hosting platform: a health check on `/` and
//! an unused webhook stub. Neither route touches bot state.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tracing::{error, info};

/// Build the liveness router.
fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .route("/webhook", post(webhook))
}

/// Bind the listener and serve it in a background task.
///
/// A bind failure is a startup error; anything after that only logs.
pub async fn spawn(port: u16) -> std::io::Result<()> {
    let address = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(address).await?;

    info!("Liveness server listening on {}", address);

    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router()).await {
            error!("Liveness server terminated unexpectedly: {}", error);
        }
    });

    Ok(())
}

/// `GET /` - the hosting platform only checks that the process answers.
async fn alive() -> &'static str {
    "🤖 Bot is alive and running!"
}

/// `POST /webhook` - unused alternative ingestion path; the body is ignored.
async fn webhook() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_reports_alive() {
        assert_eq!(alive().await, "🤖 Bot is alive and running!");
    }

    #[tokio::test]
    async fn webhook_stub_accepts_posts() {
        assert_eq!(webhook().await, StatusCode::OK);
    }
}
