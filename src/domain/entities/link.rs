//! Link entity: a stored URL and the identifier handed out for it.

use serde::{Deserialize, Serialize};

/// A stored URL.
///
/// The `id` is opaque, unique and never changes once assigned. Saving a URL
/// that is already stored yields the existing link, so the same URL always
/// maps to the same `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Link {
    pub id: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
