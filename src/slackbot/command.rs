//! Slash command payload and link extraction.

use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::slackbot::error::BotError;

/// Matches a Slack-escaped link (`<url>` or `<url|label>`) or a bare URL.
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(https?://[^>|\s]+)(?:\|[^>]*)?>|(https?://[^\s<>]+)").unwrap()
});

/// Form fields Slack posts for a slash command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackCommand {
    pub token: String,
    #[serde(default)]
    pub team_domain: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub response_url: String,
}

impl SlackCommand {
    /// Returns the single link in the command text.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::WrongCommandFormat`] if the text contains no link
    /// or more than one.
    pub fn single_link(&self) -> Result<Cow<'_, str>, BotError> {
        let mut links = extract_links(&self.text);

        match links.len() {
            1 => Ok(links.remove(0)),
            0 => Err(BotError::WrongCommandFormat(format!(
                "The command '{} {}' doesn't contain a link. Example: {} http://example.com",
                self.command, self.text, self.command
            ))),
            _ => Err(BotError::WrongCommandFormat(format!(
                "The command '{} {}' contains {} links, but only one link can be saved at a time.",
                self.command,
                self.text,
                links.len()
            ))),
        }
    }
}

/// Finds every link in a Slack message text, in order of appearance.
///
/// Slack sends `&`, `<` and `>` as `&amp;`, `&lt;` and `&gt;`; links are
/// returned unescaped.
pub fn extract_links(text: &str) -> Vec<Cow<'_, str>> {
    LINK_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| unescape(m.as_str()))
        .collect()
}

fn unescape(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&"),
    )
}
