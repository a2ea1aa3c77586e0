//! SQLite implementation of stats repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::canonical::CanonicalKey;
use crate::domain::entities::{ClickStats, StatsEntry, merge_by_key};
use crate::domain::repositories::StatsRepository;
use crate::error::StoreError;

/// SQLite repository for click counters.
///
/// Increments use an upsert that adds to the stored value in the database, so
/// concurrent batches touching the same key serialize on SQLite's write lock
/// instead of racing between a read and a write in application code.
pub struct SqliteStatsRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteStatsRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    id: String,
    short_name: Option<String>,
    clicks: i64,
}

impl TryFrom<StatsRow> for StatsEntry {
    type Error = StoreError;

    fn try_from(row: StatsRow) -> Result<Self, Self::Error> {
        let clicks = u64::try_from(row.clicks).map_err(|_| {
            StoreError::InvalidData(format!(
                "negative click count {} for '{}'",
                row.clicks, row.id
            ))
        })?;

        Ok(StatsEntry {
            key: row.id,
            short: row.short_name,
            clicks,
        })
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn increment(&self, observations: &ClickStats) -> Result<(), StoreError> {
        let merged = merge_by_key(observations)?;
        if merged.is_empty() {
            return Ok(());
        }

        // Rolled back on drop if any statement below fails.
        let mut tx = self.pool.begin().await?;

        for (key, count) in &merged {
            let count = i64::try_from(*count).map_err(|_| StoreError::CountOverflow {
                short: key.clone(),
            })?;

            // SQLite turns an overflowing INTEGER sum into REAL, so the
            // update only applies while the new total still fits.
            let affected = sqlx::query(
                r#"
                INSERT INTO stats (id, clicks)
                VALUES (?1, ?2)
                ON CONFLICT (id) DO UPDATE SET clicks = clicks + excluded.clicks
                WHERE clicks <= 9223372036854775807 - excluded.clicks
                "#,
            )
            .bind(key.as_str())
            .bind(count)
            .execute(&mut *tx)
            .await?
            .rows_affected();

            if affected == 0 {
                tracing::warn!(key = %key, clicks = count, "Click counter would overflow");
                return Err(StoreError::CountOverflow { short: key.clone() });
            }
        }

        tx.commit().await?;
        tracing::info!(keys = merged.len(), "Click stats saved");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<StatsEntry>, StoreError> {
        let rows: Vec<StatsRow> = sqlx::query_as(
            r#"
            SELECT s.id AS id, l.short_name AS short_name, s.clicks AS clicks
            FROM stats s
            LEFT JOIN links l ON l.id = s.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        tracing::debug!(count = rows.len(), "Loaded click stats");
        rows.into_iter().map(StatsEntry::try_from).collect()
    }

    async fn delete(&self, short: &str) -> Result<bool, StoreError> {
        let key = CanonicalKey::new(short);

        let affected = sqlx::query("DELETE FROM stats WHERE id = ?1")
            .bind(key.as_str())
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();

        tracing::info!(short, deleted = affected > 0, "Click stats delete");
        Ok(affected > 0)
    }
}
