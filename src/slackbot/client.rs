//! Client side of the links service API.

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::api::dto::link::{LinkResponse, SaveLinkRequest};
use crate::error::ApiError;
use crate::slackbot::error::{BotError, codes};

/// Operations the bot needs from the links service.
///
/// # Implementations
///
/// - [`HttpLinksClient`] - JSON over HTTP against `/v1/links`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinksClient: Send + Sync {
    /// Saves a URL, or gets back the link already stored for it.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::LinksExchange`] if the service rejects the request
    /// or cannot be reached.
    async fn save_link(&self, url: &str) -> Result<LinkResponse, BotError>;

    /// Lists all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::LinksExchange`] if the service rejects the request
    /// or cannot be reached.
    async fn list_links(&self) -> Result<Vec<LinkResponse>, BotError>;
}

/// [`LinksClient`] over HTTP.
///
/// Requests that fail before a response arrives (connection refused, timeout)
/// are retried with exponential backoff. Saving is idempotent per URL, so a
/// retried save cannot create a second link.
pub struct HttpLinksClient {
    http: reqwest::Client,
    links_endpoint: String,
    retries: usize,
}

impl HttpLinksClient {
    /// Creates a client for the links service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration, retries: usize) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("links-slackbot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            links_endpoint: format!("{}/v1/links", base_url.trim_end_matches('/')),
            retries,
        })
    }

    fn retry_strategy(&self) -> impl Iterator<Item = Duration> {
        ExponentialBackoff::from_millis(50)
            .max_delay(Duration::from_secs(1))
            .map(jitter)
            .take(self.retries)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, BotError> {
        let response = Retry::spawn(self.retry_strategy(), || async {
            let request = request
                .try_clone()
                .ok_or_else(|| unavailable("request body cannot be retried"))?;

            request.send().await.map_err(|e| {
                tracing::warn!(endpoint = %self.links_endpoint, error = %e, "links service request failed");
                BotError::links_exchange(
                    ApiError::new(
                        StatusCode::SERVICE_UNAVAILABLE.as_u16(),
                        codes::LINKS_UNAVAILABLE,
                        "Links service is unavailable, please try again later",
                        "Links server not found",
                        e.to_string(),
                        Vec::new(),
                    ),
                    e,
                )
            })
        })
        .await?;

        Ok(response)
    }
}

#[async_trait]
impl LinksClient for HttpLinksClient {
    async fn save_link(&self, url: &str) -> Result<LinkResponse, BotError> {
        let request = self
            .http
            .post(&self.links_endpoint)
            .json(&SaveLinkRequest::new(url));

        let response = self.send(request).await?;
        decode(response).await
    }

    async fn list_links(&self) -> Result<Vec<LinkResponse>, BotError> {
        let response = self.send(self.http.get(&self.links_endpoint)).await?;
        decode(response).await
    }
}

/// Decodes a success body, or turns an error answer into [`BotError::LinksExchange`].
async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, BotError> {
    let status = response.status();
    let body = response.bytes().await.map_err(|e| {
        BotError::links_exchange(bad_response(status, e.to_string()), e)
    })?;

    if status.is_success() {
        return serde_json::from_slice(&body)
            .map_err(|e| BotError::links_exchange(bad_response(status, e.to_string()), e));
    }

    match serde_json::from_slice::<ApiError>(&body) {
        Ok(api_error) => {
            let cause = format!("links service answered {}", status);
            Err(BotError::links_exchange(api_error, cause))
        }
        Err(e) => {
            let detail = String::from_utf8_lossy(&body).into_owned();
            Err(BotError::links_exchange(bad_response(status, detail), e))
        }
    }
}

fn bad_response(status: StatusCode, detail: String) -> ApiError {
    ApiError::new(
        status.as_u16(),
        codes::BAD_LINKS_RESPONSE,
        "Links service returned an unexpected answer",
        "Unexpected links service response",
        detail,
        Vec::new(),
    )
}

fn unavailable(detail: &str) -> BotError {
    BotError::links_exchange(
        ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            codes::LINKS_UNAVAILABLE,
            "Links service is unavailable, please try again later",
            "Links server not found",
            detail,
            Vec::new(),
        ),
        detail.to_string(),
    )
}
