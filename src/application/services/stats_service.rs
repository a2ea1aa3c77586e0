//! Click statistics service.

use std::sync::Arc;

use crate::domain::entities::ClickStats;
use crate::domain::repositories::StatsRepository;
use crate::error::StoreError;

/// Service for recording and reading click counters.
///
/// Counters are keyed by canonical short name in storage and reported under
/// the display form of the link registered at that key.
pub struct StatsService<R: StatsRepository> {
    repository: Arc<R>,
}

impl<R: StatsRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds a batch of click observations to the stored counters.
    ///
    /// Names may be any spelling; all spellings of one canonical key add up.
    /// The batch is applied atomically.
    ///
    /// # Note
    ///
    /// A batch is not idempotent. Retrying after a commit whose
    /// acknowledgement was lost counts the batch twice.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CountOverflow`] if a counter would overflow.
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self, observations), fields(entries = observations.len()))]
    pub async fn save_stats(&self, observations: &ClickStats) -> Result<(), StoreError> {
        if observations.is_empty() {
            return Ok(());
        }
        self.repository.increment(observations).await
    }

    /// Returns every counter keyed by display form.
    ///
    /// The display form is the short name of the link registered at the
    /// counter's canonical key, or the canonical key itself for counters
    /// with no registered link.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidData`] if a stored counter is corrupt.
    /// Returns [`StoreError::Storage`] on database errors.
    pub async fn load_stats(&self) -> Result<ClickStats, StoreError> {
        let entries = self.repository.find_all().await?;

        let mut stats = ClickStats::with_capacity(entries.len());
        for entry in &entries {
            *stats.entry(entry.display_form().to_owned()).or_insert(0) += entry.clicks;
        }

        Ok(stats)
    }

    /// Removes the counter for any spelling of `short`.
    ///
    /// Removing an absent counter is not an error. The registered link, if
    /// any, is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] on database errors.
    #[tracing::instrument(skip(self))]
    pub async fn delete_stats(&self, short: &str) -> Result<(), StoreError> {
        if !self.repository.delete(short).await? {
            tracing::debug!("No click stats stored, nothing deleted");
        }
        Ok(())
    }
}
