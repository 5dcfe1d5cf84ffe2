//! Router of the Slack bot.
//!
//! # Route Structure
//!
//! - `POST /v1/commands/links/save` - Save a link
//! - `POST /v1/commands/links`      - List links
//! - `GET  /health`                 - Liveness probe

use crate::api::middleware::tracing;
use crate::slackbot::BotState;
use crate::slackbot::handlers::{list_links_command_handler, save_link_command_handler};
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the bot router with all routes and middleware.
pub fn bot_router(state: BotState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/v1/commands/links/save", post(save_link_command_handler))
        .route("/v1/commands/links", post(list_links_command_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
