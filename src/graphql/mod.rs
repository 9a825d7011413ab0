//! GraphQL layer: one object type, two queries and one mutation.
//!
//! Resolvers are stateless delegates over a [`LinkRepository`] handle injected
//! at schema construction time.
//!
//! ```graphql
//! type Link { id: String! url: String! description: String! }
//! type Query { allLinks: [Link!]! link(id: String!): Link }
//! type Mutation { createLink(url: String!, description: String!): Link! }
//! ```
//!
//! [`LinkRepository`]: crate::domain::repositories::LinkRepository

pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use mutation::Mutation;
pub use query::Query;
pub use schema::{LinkSchema, build_schema};
pub use types::LinkObject;
