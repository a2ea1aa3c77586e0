#![allow(dead_code)]

use chrono::{DateTime, Utc};
use golink_store::domain::entities::Link;
use golink_store::store::Store;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A store on a fresh database file that lives as long as the returned `TempDir`.
pub async fn create_test_store() -> (Store, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("links.db")).await.unwrap();
    (store, dir)
}

pub fn timestamp(seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(seconds, 0).unwrap()
}

pub fn test_link(short: &str, long: &str, owner: &str) -> Link {
    Link {
        short: short.to_string(),
        long: long.to_string(),
        owner: owner.to_string(),
        created: timestamp(1_700_000_000),
        last_edit: timestamp(1_700_000_000),
    }
}

pub async fn insert_raw_stats(pool: &SqlitePool, id: &str, clicks: i64) {
    sqlx::query("INSERT INTO stats (id, clicks) VALUES (?1, ?2)")
        .bind(id)
        .bind(clicks)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn raw_clicks(pool: &SqlitePool, id: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT clicks FROM stats WHERE id = ?1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub fn sorted(mut links: Vec<Link>) -> Vec<Link> {
    links.sort_by(|a, b| a.short.cmp(&b.short));
    links
}
