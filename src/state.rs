//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::graphql::{LinkSchema, build_schema};

#[derive(Clone)]
pub struct AppState {
    pub schema: LinkSchema,
    pub link_repository: Arc<dyn LinkRepository>,
}

impl AppState {
    /// Builds the schema over `link_repository` and keeps the handle for health checks.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            schema: build_schema(link_repository.clone()),
            link_repository,
        }
    }
}
