//! API route configuration.

use crate::api::handlers::{get_link_handler, list_links_handler, save_link_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link API routes.
///
/// # Endpoints
///
/// - `GET  /links`       - List stored links
/// - `POST /links`       - Save a URL (or fetch the link already stored for it)
/// - `GET  /links/{id}`  - Fetch a single link
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(save_link_handler))
        .route("/links/{id}", get(get_link_handler))
}
