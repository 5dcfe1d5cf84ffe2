//! Bot errors and the handler that turns them into Slack replies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error as StdError;

use crate::error::ApiError;
use crate::interceptor::{ExceptionLogger, LoggedArg, MethodCall};
use crate::slackbot::message::SlackMessage;

/// Internal error codes for failures detected on the bot side.
pub mod codes {
    /// The links service could not be reached.
    pub const LINKS_UNAVAILABLE: &str = "BOT-F1-D1";
    /// The links service answered with something that is not an `ApiError`.
    pub const BAD_LINKS_RESPONSE: &str = "BOT-F1-D2";
}

/// Errors raised while handling a slash command.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The links service rejected the request or could not be reached.
    #[error("{}", .api_error.message)]
    LinksExchange {
        api_error: ApiError,
        #[source]
        cause: Box<dyn StdError + Send + Sync>,
    },

    /// The command text is not what the command expects.
    #[error("{0}")]
    WrongCommandFormat(String),

    /// The request did not carry the configured Slack verification token.
    #[error("Sorry! You're not allowed to use this command.")]
    WrongToken,
}

impl BotError {
    pub fn links_exchange(
        api_error: ApiError,
        cause: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::LinksExchange {
            api_error,
            cause: cause.into(),
        }
    }

    /// Structured summary of the failure, used in log lines.
    pub fn detail_message(&self) -> String {
        match self {
            Self::LinksExchange { api_error, .. } => api_error.detail_message(),
            Self::WrongCommandFormat(message) => format!("Wrong command format: {}", message),
            Self::WrongToken => "Wrong Slack verification token".to_string(),
        }
    }
}

impl LoggedArg for BotError {
    fn detail_message(&self) -> Option<String> {
        Some(BotError::detail_message(self))
    }
}

impl IntoResponse for BotError {
    fn into_response(self) -> Response {
        ExceptionLogger::tracing().log_exception_handle_methods(MethodCall::new(
            "BotExceptionHandler.handle_bot_error(..)",
            vec![&self as &dyn LoggedArg],
            || handle_bot_error(&self),
        ))
    }
}

/// Slack expects 200 for every slash command answer; failures are reported
/// as an ephemeral message visible to the caller only.
fn handle_bot_error(error: &BotError) -> Response {
    (StatusCode::OK, Json(SlackMessage::ephemeral(error.to_string()))).into_response()
}
