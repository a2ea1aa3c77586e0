//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};
use std::sync::Arc;

use crate::domain::canonical::CanonicalKey;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::StoreError;

/// SQLite repository for link storage and retrieval.
///
/// Rows are keyed by the canonical form of the short name, which makes the
/// one-link-per-canonical-key rule a primary key constraint.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    short_name: String,
    long_url: String,
    owner: String,
    created: i64,
    last_edit: i64,
}

impl TryFrom<LinkRow> for Link {
    type Error = StoreError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        Ok(Link {
            created: from_unix(row.created, &row.short_name)?,
            last_edit: from_unix(row.last_edit, &row.short_name)?,
            short: row.short_name,
            long: row.long_url,
            owner: row.owner,
        })
    }
}

fn from_unix(seconds: i64, short: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        StoreError::InvalidData(format!("invalid timestamp {seconds} on link '{short}'"))
    })
}

fn into_links(rows: Vec<LinkRow>) -> Result<Vec<Link>, StoreError> {
    rows.into_iter().map(Link::try_from).collect()
}

async fn upsert(conn: &mut SqliteConnection, link: &Link) -> Result<(), StoreError> {
    let key = link.key();

    sqlx::query(
        r#"
        INSERT INTO links (id, short_name, long_url, owner, created, last_edit)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        ON CONFLICT (id) DO UPDATE SET
            short_name = excluded.short_name,
            long_url = excluded.long_url,
            owner = excluded.owner,
            created = excluded.created,
            last_edit = excluded.last_edit
        "#,
    )
    .bind(key.as_str())
    .bind(link.short.as_str())
    .bind(link.long.as_str())
    .bind(link.owner.as_str())
    .bind(link.created.timestamp())
    .bind(link.last_edit.timestamp())
    .execute(conn)
    .await?;

    Ok(())
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn save(&self, link: &Link) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        upsert(&mut conn, link).await?;
        tracing::info!(short = %link.short, owner = %link.owner, "Link saved");
        Ok(())
    }

    async fn save_all(&self, links: &[Link]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for link in links {
            upsert(&mut *tx, link).await?;
        }

        tx.commit().await?;
        tracing::info!(count = links.len(), "Links saved");
        Ok(())
    }

    async fn find(&self, short: &str) -> Result<Option<Link>, StoreError> {
        let key = CanonicalKey::new(short);

        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT short_name, long_url, owner, created, last_edit
            FROM links
            WHERE id = ?1
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Link::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Link>, StoreError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT short_name, long_url, owner, created, last_edit
            FROM links
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        tracing::debug!(count = rows.len(), "Loaded all links");
        into_links(rows)
    }

    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        let rows: Vec<LinkRow> = sqlx::query_as(
            r#"
            SELECT short_name, long_url, owner, created, last_edit
            FROM links
            WHERE owner = ?1
            "#,
        )
        .bind(owner)
        .fetch_all(self.pool.as_ref())
        .await?;

        into_links(rows)
    }

    async fn delete(&self, short: &str) -> Result<bool, StoreError> {
        let key = CanonicalKey::new(short);

        let affected = sqlx::query("DELETE FROM links WHERE id = ?1")
            .bind(key.as_str())
            .execute(self.pool.as_ref())
            .await?
            .rows_affected();

        tracing::info!(short, deleted = affected > 0, "Link delete");
        Ok(affected > 0)
    }
}
