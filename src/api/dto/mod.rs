//! Data Transfer Objects for non-GraphQL responses.
//!
//! GraphQL request/response envelopes are provided by `async-graphql-axum`.

pub mod health;
