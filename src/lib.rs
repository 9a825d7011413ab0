//! # Hackernews GraphQL
//!
//! A small GraphQL service exposing a single `Link` type backed by MongoDB,
//! built with Axum and async-graphql.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and the repository trait
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB and in-memory link stores
//! - **GraphQL Layer** ([`graphql`]) - Schema, query and mutation resolvers
//! - **API Layer** ([`api`]) - HTTP handlers and middleware
//!
//! Control flow is linear: HTTP request → schema dispatch → resolver →
//! repository → store driver → response.
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGODB_URI="mongodb://localhost:27017"
//! cargo run
//! # or without a database
//! STORE_BACKEND=memory cargo run
//! ```
//!
//! ```graphql
//! mutation { createLink(url: "https://howtographql.com", description: "Tutorial") { id } }
//! { allLinks { id url description } }
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod graphql;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::graphql::{LinkSchema, build_schema};
    pub use crate::infrastructure::persistence::{InMemoryLinkRepository, MongoLinkRepository};
    pub use crate::state::AppState;
}
