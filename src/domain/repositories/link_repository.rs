//! Repository trait for link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored links.
///
/// Every call is a single round trip to the store. Nothing is cached,
/// retried or wrapped in a transaction; failures surface unchanged.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoLinkRepository`] - MongoDB implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Returns every stored link in store-native order.
    ///
    /// An empty store yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Connectivity`] if the store is unreachable.
    /// Returns [`AppError::Internal`] on other store errors.
    async fn find_all(&self) -> Result<Vec<Link>, AppError>;

    /// Finds a link by its store-assigned identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if the identifier is well-formed but unassigned
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidArgument`] if `id` is not a valid identifier.
    /// Returns [`AppError::Connectivity`] if the store is unreachable.
    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError>;

    /// Stores a new link and returns it with its assigned identifier.
    ///
    /// No deduplication: identical input twice yields two records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Connectivity`] if the store is unreachable.
    /// Returns [`AppError::Internal`] on other store errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Checks that the store answers.
    async fn health_check(&self) -> Result<(), AppError>;
}
