#![allow(dead_code)]

use axum::{Router, routing::get};
use links::api::handlers::health_handler;
use links::api::routes::link_routes;
use links::application::services::LinkService;
use links::domain::entities::Link;
use links::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use links::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Id of the link seeded by [`seed_test_link`] and [`create_memory_state_with_seed`].
pub const SEEDED_ID: &str = "5a30508811d3b338a0b3f85c";
pub const SEEDED_URL: &str = "http://test.com";

pub async fn create_test_link(pool: &PgPool, id: &str, url: &str) {
    sqlx::query("INSERT INTO links (id, url) VALUES ($1, $2)")
        .bind(id)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn seed_test_link(pool: &PgPool) {
    create_test_link(pool, SEEDED_ID, SEEDED_URL).await;
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let link_repo = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    AppState::new(LinkService::new(link_repo))
}

pub fn create_memory_state() -> AppState {
    AppState::new(LinkService::new(Arc::new(InMemoryLinkRepository::new())))
}

pub fn create_memory_state_with_seed() -> AppState {
    let repo = InMemoryLinkRepository::with_links([Link::new(SEEDED_ID, SEEDED_URL)]);
    AppState::new(LinkService::new(Arc::new(repo)))
}

/// Links service routes without the path normalization wrapper.
pub fn links_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", link_routes())
        .with_state(state)
}
