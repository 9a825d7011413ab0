//! GraphQL route configuration.

use axum::{Router, routing::get, routing::post};

use crate::api::handlers::{graphiql_handler, graphql_handler, sdl_handler};
use crate::state::AppState;

/// GraphQL routes.
///
/// # Endpoints
///
/// - `POST /graphql`        - Execute a query or mutation
/// - `GET  /graphql`        - GraphiQL IDE (when `graphiql` is true)
/// - `GET  /graphql/schema` - Schema document (SDL)
pub fn graphql_routes(graphiql: bool) -> Router<AppState> {
    let endpoint = if graphiql {
        get(graphiql_handler).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/graphql", endpoint)
        .route("/graphql/schema", get(sdl_handler))
}
