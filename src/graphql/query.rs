//! Query root: `allLinks` and `link(id)`.

use std::sync::Arc;

use async_graphql::{ErrorExtensions, Object, Result};

use super::types::LinkObject;
use crate::domain::repositories::LinkRepository;

pub struct Query {
    links: Arc<dyn LinkRepository>,
}

impl Query {
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }
}

#[Object]
impl Query {
    /// Every stored link, in store order.
    async fn all_links(&self) -> Result<Vec<LinkObject>> {
        let links = self.links.find_all().await.map_err(|e| e.extend())?;
        Ok(links.into_iter().map(LinkObject::from).collect())
    }

    /// A single link, or null when no link has this id.
    async fn link(&self, id: String) -> Result<Option<LinkObject>> {
        let link = self.links.find_by_id(&id).await.map_err(|e| e.extend())?;
        Ok(link.map(LinkObject::from))
    }
}
