//! Mutation root: `createLink(url, description)`.

use std::sync::Arc;

use async_graphql::{ErrorExtensions, Object, Result};

use super::types::LinkObject;
use crate::domain::entities::NewLink;
use crate::domain::repositories::LinkRepository;

pub struct Mutation {
    links: Arc<dyn LinkRepository>,
}

impl Mutation {
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }
}

#[Object]
impl Mutation {
    /// Stores a new link and returns it with its assigned id.
    async fn create_link(&self, url: String, description: String) -> Result<LinkObject> {
        let link = self
            .links
            .create(NewLink::new(url, description))
            .await
            .map_err(|e| e.extend())?;

        Ok(link.into())
    }
}
