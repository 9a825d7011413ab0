//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic and without
//! any dependency on the store driver's document types.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored URL with its description
//! - [`NewLink`] - Input for creating a link (no identifier yet)

pub mod link;

pub use link::{Link, NewLink};
