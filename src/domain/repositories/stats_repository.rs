//! Repository trait for click counters.

use crate::domain::entities::{ClickStats, StatsEntry};
use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface for per-short-name click counters.
///
/// Counters are stored under canonical keys and only ever grow until deleted.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteStatsRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_stats.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Adds every observation to the counter at its canonical key.
    ///
    /// The batch is applied atomically: either all counters move or none do.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CountOverflow`] if a counter would overflow.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn increment(&self, observations: &ClickStats) -> Result<(), StoreError>;

    /// Returns every stored counter joined with the link registered at its key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidData`] if a stored counter is negative.
    /// Returns [`StoreError::Storage`] on database errors.
    async fn find_all(&self) -> Result<Vec<StatsEntry>, StoreError>;

    /// Removes the counter stored under the canonical form of `short`.
    ///
    /// Returns `Ok(true)` if a counter was removed, `Ok(false)` if none existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    async fn delete(&self, short: &str) -> Result<bool, StoreError>;
}
