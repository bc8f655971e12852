//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Base URL short links are displayed under, without a trailing slash.
    pub public_base_url: String,
}

impl AppState {
    pub fn new(link_repository: Arc<dyn LinkRepository>, public_base_url: impl Into<String>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(link_repository)),
            public_base_url: public_base_url.into(),
        }
    }

    /// Full public URL for a short code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.public_base_url, code)
    }
}
