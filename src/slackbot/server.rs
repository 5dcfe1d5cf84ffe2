//! Runtime setup of the Slack bot.

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use crate::server::shutdown_signal;
use crate::slackbot::BotState;
use crate::slackbot::client::HttpLinksClient;
use crate::slackbot::config::BotConfig;
use crate::slackbot::routes::bot_router;
use crate::slackbot::service::LinksBotService;

/// Runs the bot HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, the bind fails, or
/// the server stops with an error.
pub async fn run(config: BotConfig) -> Result<()> {
    let client = HttpLinksClient::new(
        &config.links_url,
        Duration::from_secs(config.links_timeout_seconds),
        config.links_retries,
    )?;
    let state = BotState::new(
        LinksBotService::new(Arc::new(client)),
        config.verification_token.as_str(),
    );

    let app = bot_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Slack bot listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
