//! Slack bot that exchanges links with the links service.
//!
//! Slack slash commands arrive as form posts; the bot extracts the link from
//! the command text, talks to the links service through a [`LinksClient`]
//! and answers with a Slack message.
//!
//! # Modules
//!
//! - [`client`] - [`LinksClient`] trait and its HTTP implementation
//! - [`command`] - Slash command payload and link extraction
//! - [`config`] - Bot configuration from environment variables
//! - [`error`] - [`BotError`] and its Slack reply, logged by the interceptor
//! - [`handlers`] - Axum handlers for the slash commands
//! - [`message`] - Slack reply payloads
//! - [`routes`] - Bot router
//! - [`server`] - Bot server lifecycle
//! - [`service`] - Command handling on top of the client

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod handlers;
pub mod message;
pub mod routes;
pub mod server;
pub mod service;

pub use client::{HttpLinksClient, LinksClient};
pub use command::SlackCommand;
pub use config::BotConfig;
pub use error::BotError;
pub use message::SlackMessage;
pub use service::LinksBotService;

use std::sync::Arc;

/// Shared state injected into the bot handlers.
#[derive(Clone)]
pub struct BotState {
    pub bot_service: Arc<LinksBotService>,
    pub verification_token: Arc<str>,
}

impl BotState {
    pub fn new(bot_service: LinksBotService, verification_token: impl Into<Arc<str>>) -> Self {
        Self {
            bot_service: Arc::new(bot_service),
            verification_token: verification_token.into(),
        }
    }

    /// Checks the Slack verification token sent with a command.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::WrongToken`] if the token does not match.
    pub fn verify_token(&self, token: &str) -> Result<(), BotError> {
        if constant_time_eq(token.as_bytes(), self.verification_token.as_bytes()) {
            Ok(())
        } else {
            Err(BotError::WrongToken)
        }
    }
}

/// Compares two byte strings in time independent of where they differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slackbot::client::MockLinksClient;

    fn state(token: &str) -> BotState {
        BotState::new(LinksBotService::new(Arc::new(MockLinksClient::new())), token)
    }

    #[test]
    fn test_verify_token() {
        let state = state("slack-token");

        assert!(state.verify_token("slack-token").is_ok());
        assert!(matches!(
            state.verify_token("slack-tokeN"),
            Err(BotError::WrongToken)
        ));
        assert!(matches!(
            state.verify_token("slack-token-longer"),
            Err(BotError::WrongToken)
        ));
        assert!(matches!(state.verify_token(""), Err(BotError::WrongToken)));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(constant_time_eq(b"", b""));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
