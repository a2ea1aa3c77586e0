//! SQLite connection pool setup and schema migrations.

use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Embedded migrations from `./migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Opens (creating if missing) the database file and applies migrations.
///
/// WAL journaling lets readers proceed while a writer holds the lock; writers
/// wait for each other up to `db_busy_timeout` seconds.
///
/// # Errors
///
/// Returns [`StoreError::Init`] if the file cannot be opened or created, or
/// if the schema cannot be established.
pub async fn open_pool(config: &StoreConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(&config.database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(config.db_busy_timeout));

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout))
        .connect_with(options)
        .await
        .map_err(|e| StoreError::init(&config.database_path, e))?;

    tracing::debug!(path = %config.database_path.display(), "Connected to database");

    if let Err(e) = MIGRATOR.run(&pool).await {
        pool.close().await;
        return Err(StoreError::init(&config.database_path, e));
    }

    tracing::info!(path = %config.database_path.display(), "Database migrations applied");

    Ok(pool)
}
