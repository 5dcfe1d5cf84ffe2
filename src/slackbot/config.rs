//! Slack bot configuration loaded from environment variables.
//!
//! ## Required Variables
//!
//! - `LINKS_URL` - Base URL of the links service, e.g. `http://links:3000`
//! - `SLACK_VERIFICATION_TOKEN` - Token Slack sends with every slash command
//!
//! ## Optional Variables
//!
//! - `BOT_LISTEN` - Bind address (default: `0.0.0.0:3001`)
//! - `LINKS_TIMEOUT` - Request timeout towards the links service in seconds (default: 10)
//! - `LINKS_RETRIES` - Retries for requests that got no response (default: 2, max: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::config::{validate_listen_addr, validate_log_format};

/// Bot configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub links_url: String,
    pub verification_token: String,
    pub listen_addr: String,
    pub links_timeout_seconds: u64,
    pub links_retries: usize,
    pub log_level: String,
    pub log_format: String,
}

impl BotConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LINKS_URL` or `SLACK_VERIFICATION_TOKEN` is missing.
    pub fn from_env() -> Result<Self> {
        let links_url = env::var("LINKS_URL").context("LINKS_URL must be set")?;
        let verification_token = env::var("SLACK_VERIFICATION_TOKEN")
            .context("SLACK_VERIFICATION_TOKEN must be set")?;

        let listen_addr = env::var("BOT_LISTEN").unwrap_or_else(|_| "0.0.0.0:3001".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let links_timeout_seconds = env::var("LINKS_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let links_retries = env::var("LINKS_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2);

        Ok(Self {
            links_url,
            verification_token,
            listen_addr,
            links_timeout_seconds,
            links_retries,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `links_url` is not an absolute HTTP(S) URL
    /// - `verification_token` is empty
    /// - `listen_addr` or `log_format` is invalid
    /// - `links_timeout_seconds` is zero or `links_retries` exceeds 10
    pub fn validate(&self) -> Result<()> {
        let links_url = Url::parse(&self.links_url)
            .with_context(|| format!("LINKS_URL is not a valid URL: '{}'", self.links_url))?;
        if !matches!(links_url.scheme(), "http" | "https") {
            anyhow::bail!(
                "LINKS_URL must start with 'http://' or 'https://', got '{}'",
                self.links_url
            );
        }

        if self.verification_token.is_empty() {
            anyhow::bail!("SLACK_VERIFICATION_TOKEN must not be empty");
        }

        validate_listen_addr("BOT_LISTEN", &self.listen_addr)?;
        validate_log_format(&self.log_format)?;

        if self.links_timeout_seconds == 0 {
            anyhow::bail!("LINKS_TIMEOUT must be greater than 0");
        }
        if self.links_retries > 10 {
            anyhow::bail!("LINKS_RETRIES must be at most 10, got {}", self.links_retries);
        }

        Ok(())
    }

    /// Prints configuration summary (without the token).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Links service: {}", self.links_url);
        tracing::info!(
            "  Links timeout: {}s, retries: {}",
            self.links_timeout_seconds,
            self.links_retries
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates bot configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
pub fn load_from_env() -> Result<BotConfig> {
    let config = BotConfig::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> BotConfig {
        BotConfig {
            links_url: "http://localhost:3000".to_string(),
            verification_token: "slack-token".to_string(),
            listen_addr: "0.0.0.0:3001".to_string(),
            links_timeout_seconds: 10,
            links_retries: 2,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.links_url = "localhost:3000".to_string();
        assert!(config.validate().is_err());

        config.links_url = "ftp://localhost".to_string();
        assert!(config.validate().is_err());

        config.links_url = "https://links.example.com".to_string();
        assert!(config.validate().is_ok());

        config.verification_token = String::new();
        assert!(config.validate().is_err());

        config.verification_token = "slack-token".to_string();
        config.links_retries = 11;
        assert!(config.validate().is_err());

        config.links_retries = 0;
        config.links_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LINKS_URL", "http://links:3000");
            env::set_var("SLACK_VERIFICATION_TOKEN", "secret");
            env::set_var("LINKS_RETRIES", "4");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.links_url, "http://links:3000");
        assert_eq!(config.verification_token, "secret");
        assert_eq!(config.links_retries, 4);
        assert_eq!(config.links_timeout_seconds, 10);

        unsafe {
            env::remove_var("LINKS_URL");
            env::remove_var("SLACK_VERIFICATION_TOKEN");
            env::remove_var("LINKS_RETRIES");
        }
    }

    #[test]
    #[serial]
    fn test_missing_token() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LINKS_URL", "http://links:3000");
            env::remove_var("SLACK_VERIFICATION_TOKEN");
        }

        assert!(BotConfig::from_env().is_err());

        unsafe {
            env::remove_var("LINKS_URL");
        }
    }
}
