//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /graphql`        - GraphQL execution
//! - `GET  /graphql`        - GraphiQL IDE (optional)
//! - `GET  /graphql/schema` - Schema document
//! - `GET  /health`         - Store health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `graphiql` - when `true`, `GET /graphql` serves the GraphiQL IDE
pub fn app_router(state: AppState, graphiql: bool) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(api::routes::graphql_routes(graphiql))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
