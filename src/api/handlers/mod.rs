//! HTTP request handlers for API endpoints.

pub mod health;
pub mod links;

pub use health::health_handler;
pub use links::{get_link_handler, list_links_handler, save_link_handler};
