//! Link saving and retrieval service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_url;

/// Service for saving and retrieving links.
///
/// Validates submitted URLs and delegates storage to a [`LinkRepository`].
/// The repository is chosen at startup (PostgreSQL or in-memory), so it is
/// held as a trait object.
#[derive(Clone)]
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Saves a URL and returns its link.
    ///
    /// # Deduplication
    ///
    /// A URL that is already stored returns the existing link with its
    /// original id. The URL is stored exactly as submitted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is blank or not an
    /// absolute HTTP(S) URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn save_link(&self, url: &str) -> Result<Link, AppError> {
        validate_url(url).map_err(|e| {
            AppError::bad_request("Invalid URL", vec![format!("url: {}", e)])
        })?;

        let link = self.link_repository.save_link(url).await?;

        metrics::counter!("links_saved_total").increment(1);
        tracing::debug!(id = %link.id, url = %link.url, "link saved");

        Ok(link)
    }

    /// Retrieves a link by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link(&self, id: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found", format!("No link with id '{}'", id)))
    }

    /// Lists all stored links in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Counts stored links; used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
