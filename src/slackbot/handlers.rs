//! Axum handlers for the Slack slash commands.

use axum::{Form, Json, extract::State};

use crate::slackbot::BotState;
use crate::slackbot::command::SlackCommand;
use crate::slackbot::error::BotError;
use crate::slackbot::message::SlackMessage;

/// Saves the link given in the command text.
///
/// # Endpoint
///
/// `POST /v1/commands/links/save`
///
/// # Reply
///
/// ```json
/// {
///   "response_type": "in_channel",
///   "text": "Thanks, the link 'http://test.com' has been saved as '5a30508811d3b338a0b3f85c'."
/// }
/// ```
///
/// # Errors
///
/// Failures are answered with `200 OK` and an ephemeral message, see
/// [`BotError`].
pub async fn save_link_command_handler(
    State(state): State<BotState>,
    Form(command): Form<SlackCommand>,
) -> Result<Json<SlackMessage>, BotError> {
    state.verify_token(&command.token)?;

    let text = state.bot_service.save_link(&command).await?;

    Ok(Json(SlackMessage::in_channel(text)))
}

/// Lists stored links.
///
/// # Endpoint
///
/// `POST /v1/commands/links`
pub async fn list_links_command_handler(
    State(state): State<BotState>,
    Form(command): Form<SlackCommand>,
) -> Result<Json<SlackMessage>, BotError> {
    state.verify_token(&command.token)?;

    let text = state.bot_service.list_links(&command).await?;

    Ok(Json(SlackMessage::in_channel(text)))
}
