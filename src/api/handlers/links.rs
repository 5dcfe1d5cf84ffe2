//! Handlers for link endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use validator::Validate;

use crate::api::dto::link::{LinkResponse, SaveLinkRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Saves a URL, or returns the link already stored for it.
///
/// # Endpoint
///
/// `POST /v1/links`
///
/// # Request Body
///
/// ```json
/// { "url": "http://test.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "id": "5a30508811d3b338a0b3f85c", "url": "http://test.com" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with an `ApiError` body if the body is not a JSON
/// `SaveLinkRequest` or the URL is invalid.
pub async fn save_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.save_link(&payload.url).await?;

    Ok(Json(link.into()))
}

/// Lists all stored links.
///
/// # Endpoint
///
/// `GET /v1/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Returns a single link.
///
/// # Endpoint
///
/// `GET /v1/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found with an `ApiError` body for unknown ids.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&id).await?;

    Ok(Json(link.into()))
}
