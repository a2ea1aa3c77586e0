//! Repository trait for link data access.

use crate::domain::entities::Link;
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for registered links.
///
/// Every method that takes a short name canonicalizes it first, so any
/// spelling of a registered name reaches the same record.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts the link, or fully replaces the one registered at the same
    /// canonical key (including its stored `short` spelling).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn save(&self, link: &Link) -> Result<(), StoreError>;

    /// Saves every link in a single transaction.
    ///
    /// Later entries win when two links share a canonical key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors; nothing is saved.
    async fn save_all(&self, links: &[Link]) -> Result<(), StoreError>;

    /// Finds the link registered under the canonical form of `short`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find(&self, short: &str) -> Result<Option<Link>, StoreError>;

    /// Returns every link in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_all(&self) -> Result<Vec<Link>, StoreError>;

    /// Returns links whose owner is byte-for-byte equal to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError>;

    /// Removes the link registered under the canonical form of `short`.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn delete(&self, short: &str) -> Result<bool, StoreError>;
}
