//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// PostgreSQL repository for link storage and retrieval.
///
/// `links` carries a unique index on `md5(url)`, so concurrent saves of the
/// same URL settle on a single row whatever the URL length. Lookups by URL go
/// through the digest and then compare the URL itself.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn save_link(&self, url: &str) -> Result<Link, AppError> {
        // The outer SELECT runs on the statement snapshot: it sees the row
        // only when the insert was skipped, so at most one branch yields.
        let link = sqlx::query_as::<_, Link>(
            r#"
            WITH inserted AS (
                INSERT INTO links (id, url)
                VALUES ($1, $2)
                ON CONFLICT ((md5(url))) DO NOTHING
                RETURNING id, url
            )
            SELECT id, url FROM inserted
            UNION ALL
            SELECT id, url FROM links
            WHERE md5(url) = md5($2) AND url = $2
            LIMIT 1
            "#,
        )
        .bind(generate_id())
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        if let Some(link) = link {
            return Ok(link);
        }

        // A concurrent save committed the row after our snapshot was taken.
        self.find_by_url(url).await?.ok_or_else(|| {
            AppError::internal("Database error", format!("link for '{}' vanished during save", url))
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>("SELECT id, url FROM links WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(link)
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let link = sqlx::query_as::<_, Link>(
            "SELECT id, url FROM links WHERE md5(url) = md5($1) AND url = $1",
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let links =
            sqlx::query_as::<_, Link>("SELECT id, url FROM links ORDER BY created_at, id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
