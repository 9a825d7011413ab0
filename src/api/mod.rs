//! HTTP API layer.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies for non-GraphQL endpoints
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - GraphQL route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
