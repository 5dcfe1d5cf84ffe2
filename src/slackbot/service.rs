//! Slash command handling on top of a [`LinksClient`].

use std::sync::Arc;

use crate::slackbot::client::LinksClient;
use crate::slackbot::command::SlackCommand;
use crate::slackbot::error::BotError;

/// Turns slash commands into links service calls and reply texts.
pub struct LinksBotService {
    links_client: Arc<dyn LinksClient>,
}

impl LinksBotService {
    pub fn new(links_client: Arc<dyn LinksClient>) -> Self {
        Self { links_client }
    }

    /// Saves the single link found in the command text.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::WrongCommandFormat`] if the text does not hold
    /// exactly one link, and [`BotError::LinksExchange`] if the links
    /// service fails.
    pub async fn save_link(&self, command: &SlackCommand) -> Result<String, BotError> {
        let url = command.single_link()?;
        tracing::info!(user = %command.user_name, url = %url, "saving link");

        let link = self.links_client.save_link(&url).await?;

        Ok(format!(
            "Thanks, the link '{}' has been saved as '{}'.",
            link.url, link.id
        ))
    }

    /// Lists stored links, one per line.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::LinksExchange`] if the links service fails.
    pub async fn list_links(&self, command: &SlackCommand) -> Result<String, BotError> {
        tracing::info!(user = %command.user_name, "listing links");

        let links = self.links_client.list_links().await?;

        if links.is_empty() {
            return Ok("There are no links yet.".to_string());
        }

        let lines: Vec<String> = links
            .iter()
            .map(|link| format!("{} ({})", link.url, link.id))
            .collect();

        Ok(lines.join("\n"))
    }
}
