//! Handlers for the GraphQL endpoint.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::state::AppState;

/// Executes a GraphQL request.
///
/// # Endpoint
///
/// `POST /graphql`
///
/// Request and response bodies use the standard GraphQL-over-HTTP JSON
/// envelope (`query`, `variables`, `operationName` / `data`, `errors`).
/// Resolver failures are reported in `errors[].extensions.code` with a
/// `200 OK` status.
pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serves the GraphiQL IDE pointed at `/graphql`.
///
/// # Endpoint
///
/// `GET /graphql` (only when `GRAPHIQL` is enabled)
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Returns the schema document in SDL form.
///
/// # Endpoint
///
/// `GET /graphql/schema`
pub async fn sdl_handler(State(state): State<AppState>) -> String {
    state.schema.sdl()
}
