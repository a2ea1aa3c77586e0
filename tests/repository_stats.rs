mod common;

use golink_store::StoreError;
use golink_store::domain::entities::{ClickStats, StatsEntry};
use golink_store::domain::repositories::{LinkRepository, StatsRepository};
use golink_store::infrastructure::persistence::{SqliteLinkRepository, SqliteStatsRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

fn batch(entries: &[(&str, u64)]) -> ClickStats {
    entries
        .iter()
        .map(|(short, clicks)| (short.to_string(), *clicks))
        .collect()
}

fn sorted(mut entries: Vec<StatsEntry>) -> Vec<StatsEntry> {
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    entries
}

#[sqlx::test]
async fn test_increment_creates_and_adds(pool: SqlitePool) {
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    repo.increment(&batch(&[("wiki", 2)])).await.unwrap();
    assert_eq!(common::raw_clicks(&pool, "wiki").await, Some(2));

    repo.increment(&batch(&[("wiki", 3)])).await.unwrap();
    assert_eq!(common::raw_clicks(&pool, "wiki").await, Some(5));
}

#[sqlx::test]
async fn test_increment_stores_under_canonical_key(pool: SqlitePool) {
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    repo.increment(&batch(&[("B-c", 1), ("b.c", 2), ("bc", 4)]))
        .await
        .unwrap();

    assert_eq!(common::raw_clicks(&pool, "bc").await, Some(7));
    assert_eq!(common::raw_clicks(&pool, "B-c").await, None);
}

#[sqlx::test]
async fn test_increment_adds_to_existing_counter(pool: SqlitePool) {
    common::insert_raw_stats(&pool, "docs", 40).await;
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    repo.increment(&batch(&[("Docs", 2)])).await.unwrap();

    assert_eq!(common::raw_clicks(&pool, "docs").await, Some(42));
}

#[sqlx::test]
async fn test_increment_batch_overflow_rejected(pool: SqlitePool) {
    common::insert_raw_stats(&pool, "a", 1).await;
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    let result = repo
        .increment(&batch(&[("a", 5), ("big", i64::MAX as u64), ("B-I-G", 1)]))
        .await;

    assert!(matches!(result, Err(StoreError::CountOverflow { .. })));
    assert_eq!(common::raw_clicks(&pool, "a").await, Some(1));
    assert_eq!(common::raw_clicks(&pool, "big").await, None);
}

#[sqlx::test]
async fn test_increment_overflow_across_batches(pool: SqlitePool) {
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    repo.increment(&batch(&[("big", i64::MAX as u64)]))
        .await
        .unwrap();

    let result = repo.increment(&batch(&[("Big", 1)])).await;

    assert!(matches!(result, Err(StoreError::CountOverflow { .. })));
    assert_eq!(common::raw_clicks(&pool, "big").await, Some(i64::MAX));

    // counters stay readable
    repo.increment(&batch(&[("other", 1)])).await.unwrap();
    let entries = sorted(repo.find_all().await.unwrap());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].clicks, i64::MAX as u64);
    assert_eq!(entries[1].clicks, 1);
}

#[sqlx::test]
async fn test_increment_rolls_back_earlier_writes(pool: SqlitePool) {
    common::insert_raw_stats(&pool, "a", 1).await;
    common::insert_raw_stats(&pool, "z", i64::MAX).await;
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    // "a" and "new" are written before "z" fails inside the transaction.
    let result = repo
        .increment(&batch(&[("A", 5), ("new", 2), ("Z", 1)]))
        .await;

    assert!(matches!(result, Err(StoreError::CountOverflow { .. })));
    assert_eq!(common::raw_clicks(&pool, "a").await, Some(1));
    assert_eq!(common::raw_clicks(&pool, "new").await, None);
    assert_eq!(common::raw_clicks(&pool, "z").await, Some(i64::MAX));
}

#[sqlx::test]
async fn test_find_all_joins_registered_short(pool: SqlitePool) {
    let links = SqliteLinkRepository::new(Arc::new(pool.clone()));
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    links
        .save(&common::test_link("B-c", "https://example.com", ""))
        .await
        .unwrap();
    repo.increment(&batch(&[("bc", 3), ("orphan", 1)]))
        .await
        .unwrap();

    let entries = sorted(repo.find_all().await.unwrap());

    assert_eq!(
        entries,
        vec![
            StatsEntry {
                key: "bc".to_string(),
                short: Some("B-c".to_string()),
                clicks: 3,
            },
            StatsEntry {
                key: "orphan".to_string(),
                short: None,
                clicks: 1,
            },
        ]
    );
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = SqliteStatsRepository::new(Arc::new(pool.clone()));

    repo.increment(&batch(&[("bc", 3)])).await.unwrap();

    assert!(repo.delete("B-c").await.unwrap());
    assert_eq!(common::raw_clicks(&pool, "bc").await, None);

    // already gone
    assert!(!repo.delete("bc").await.unwrap());
}
