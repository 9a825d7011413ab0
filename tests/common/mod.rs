#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use hackernews_graphql::api::handlers::health_handler;
use hackernews_graphql::api::routes::graphql_routes;
use hackernews_graphql::domain::entities::{Link, NewLink};
use hackernews_graphql::domain::repositories::LinkRepository;
use hackernews_graphql::error::AppError;
use hackernews_graphql::infrastructure::persistence::{InMemoryLinkRepository, MongoLinkRepository};
use hackernews_graphql::state::AppState;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Database};
use serde_json::{Value, json};
use std::sync::Arc;

pub const CREATE_LINK: &str = "mutation Create($url: String!, $description: String!) { \
     createLink(url: $url, description: $description) { id url description } }";

pub const ALL_LINKS: &str = "{ allLinks { id url description } }";

pub const LINK_BY_ID: &str = "query Link($id: String!) { link(id: $id) { id url description } }";

/// A repository whose store is never reachable.
pub struct UnreachableRepository;

#[async_trait]
impl LinkRepository for UnreachableRepository {
    async fn find_all(&self) -> Result<Vec<Link>, AppError> {
        Err(AppError::connectivity("Store unreachable"))
    }

    async fn find_by_id(&self, _id: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::connectivity("Store unreachable"))
    }

    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::connectivity("Store unreachable"))
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Err(AppError::connectivity("Store unreachable"))
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkRepository::new()))
}

pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .merge(graphql_routes(true))
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn graphql_body(query: &str, variables: Value) -> Value {
    json!({ "query": query, "variables": variables })
}

/// A repository over a fresh, uniquely named collection.
///
/// Returns `None` when `MONGODB_TEST_URI` is unset so MongoDB tests can skip.
pub async fn mongo_test_repository() -> Option<(MongoLinkRepository, Database, String)> {
    let Ok(uri) = std::env::var("MONGODB_TEST_URI") else {
        eprintln!("MONGODB_TEST_URI not set, skipping MongoDB test");
        return None;
    };

    let client = Client::with_uri_str(&uri).await.unwrap();
    let database = client.database("hackernews_test");
    let collection = format!("links_{}", ObjectId::new().to_hex());
    let repo = MongoLinkRepository::new(database.clone(), &collection);

    Some((repo, database, collection))
}

pub async fn drop_collection(database: &Database, name: &str) {
    database
        .collection::<mongodb::bson::Document>(name)
        .drop()
        .await
        .unwrap();
}
