//! HTTP request handlers.

pub mod graphql;
pub mod health;

pub use graphql::{graphiql_handler, graphql_handler, sdl_handler};
pub use health::health_handler;
