//! In-memory implementation of link repository.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;
use tracing::debug;

use super::link_document::parse_link_id;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// A process-local link store.
///
/// Mirrors the MongoDB repository's observable behaviour: identifiers are
/// freshly generated ObjectIds, listing returns insertion order, malformed
/// identifiers are rejected and unknown ones yield `None`. Data is lost when
/// the process exits.
///
/// # Use Cases
///
/// - Local development without a MongoDB server
/// - HTTP and schema-level tests
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.links.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let oid = parse_link_id(id)?.to_hex();

        Ok(self
            .links
            .read()
            .await
            .iter()
            .find(|link| link.id == oid)
            .cloned())
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let link = Link::new(ObjectId::new().to_hex(), new_link.url, new_link.description);
        self.links.write().await.push(link.clone());
        debug!(id = %link.id, "Created link");

        Ok(link)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
