//! Shared state injected into the links service handlers.

use crate::application::services::LinkService;

#[derive(Clone)]
pub struct AppState {
    pub link_service: LinkService,
}

impl AppState {
    pub fn new(link_service: LinkService) -> Self {
        Self { link_service }
    }
}
