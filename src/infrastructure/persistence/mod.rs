//! Link store implementations.
//!
//! # Repositories
//!
//! - [`MongoLinkRepository`] - MongoDB `links` collection
//! - [`InMemoryLinkRepository`] - Process-local store for development and tests
//!
//! Both share the document contract in [`link_document`].

pub mod link_document;
pub mod memory_link_repository;
pub mod mongo_link_repository;

pub use link_document::{LinkDocument, parse_link_id};
pub use memory_link_repository::InMemoryLinkRepository;
pub use mongo_link_repository::MongoLinkRepository;
