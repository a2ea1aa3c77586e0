//! The store handle owned by the embedding service.

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{LinkService, StatsService};
use crate::config::StoreConfig;
use crate::domain::entities::{ClickStats, Link};
use crate::error::Result;
use crate::infrastructure::persistence::{
    SqliteLinkRepository, SqliteStatsRepository, open_pool,
};

/// Durable link and click-stats store.
///
/// Owns its SQLite pool exclusively. Every operation is atomic with respect
/// to concurrent callers, and the handle can be shared behind an `Arc`.
pub struct Store {
    pool: Arc<SqlitePool>,
    links: LinkService<SqliteLinkRepository>,
    stats: StatsService<SqliteStatsRepository>,
}

impl Store {
    /// Opens or creates a store at `path` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError::Init`] if the file cannot be opened or
    /// created, or the schema cannot be established.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::connect(&StoreConfig::new(path.as_ref())).await
    }

    /// Opens or creates a store as described by `config`.
    ///
    /// # Errors
    ///
    /// See [`Store::open`].
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let pool = Arc::new(open_pool(config).await?);

        let link_repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let stats_repository = Arc::new(SqliteStatsRepository::new(pool.clone()));

        Ok(Self {
            pool,
            links: LinkService::new(link_repository),
            stats: StatsService::new(stats_repository),
        })
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(self) {
        self.pool.close().await;
        tracing::debug!("Store closed");
    }

    /// Link registration and lookup.
    pub fn links(&self) -> &LinkService<SqliteLinkRepository> {
        &self.links
    }

    /// Click counters.
    pub fn stats(&self) -> &StatsService<SqliteStatsRepository> {
        &self.stats
    }

    /// Registers `link`, fully replacing any link at the same canonical key.
    pub async fn save(&self, link: &Link) -> Result<()> {
        self.links.save(link).await
    }

    /// Loads the link registered under any spelling of `short`.
    ///
    /// Fails with [`crate::StoreError::NotFound`] when absent.
    pub async fn load(&self, short: &str) -> Result<Link> {
        self.links.load(short).await
    }

    /// Returns every link in unspecified order.
    pub async fn load_all(&self) -> Result<Vec<Link>> {
        self.links.load_all().await
    }

    /// Removes the link at the canonical key of `short`, if any.
    pub async fn delete(&self, short: &str) -> Result<()> {
        self.links.delete(short).await
    }

    /// Returns links whose owner is byte-identical to `owner`.
    pub async fn get_links_by_owner(&self, owner: &str) -> Result<Vec<Link>> {
        self.links.links_by_owner(owner).await
    }

    /// Adds a batch of click observations; see [`StatsService::save_stats`].
    pub async fn save_stats(&self, observations: &ClickStats) -> Result<()> {
        self.stats.save_stats(observations).await
    }

    /// Returns all click counters keyed by display form.
    pub async fn load_stats(&self) -> Result<ClickStats> {
        self.stats.load_stats().await
    }

    /// Removes the counter at the canonical key of `short`, if any.
    pub async fn delete_stats(&self, short: &str) -> Result<()> {
        self.stats.delete_stats(short).await
    }
}
