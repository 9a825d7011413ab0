//! MongoDB implementation of link repository.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::debug;

use super::link_document::{LinkDocument, parse_link_id};
use crate::config::Config;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// MongoDB repository for link storage and retrieval.
///
/// Holds a cheap-to-clone handle to the driver's shared connection pool;
/// concurrency and pooling are owned by the driver.
#[derive(Clone)]
pub struct MongoLinkRepository {
    database: Database,
    links: Collection<LinkDocument>,
}

impl MongoLinkRepository {
    /// Creates a repository over `collection_name` in an already connected database.
    pub fn new(database: Database, collection_name: &str) -> Self {
        let links = database.collection::<LinkDocument>(collection_name);
        Self { database, links }
    }

    /// Builds the driver client from configuration.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation (or [`LinkRepository::health_check`]), not here.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string cannot be parsed.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(&config.mongodb_uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.max_pool_size = Some(config.max_pool_size);
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        Ok(Self::new(database, &config.collection_name))
    }

    /// Name of the backing collection.
    pub fn collection_name(&self) -> &str {
        self.links.name()
    }
}

#[async_trait]
impl LinkRepository for MongoLinkRepository {
    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        let cursor = self.links.find(doc! {}).await?;
        let documents: Vec<LinkDocument> = cursor.try_collect().await?;
        debug!(count = documents.len(), "Fetched all links");

        documents
            .into_iter()
            .map(|document| document.into_link(None))
            .collect()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let oid = parse_link_id(id)?;

        let document = self.links.find_one(doc! { "_id": oid }).await?;
        debug!(%oid, found = document.is_some(), "Looked up link");

        document.map(|d| d.into_link(None)).transpose()
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let document = LinkDocument::from(new_link);

        let result = self.links.insert_one(&document).await?;
        let link = document.into_link(result.inserted_id.as_object_id())?;
        debug!(id = %link.id, "Created link");

        Ok(link)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
