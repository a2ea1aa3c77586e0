mod common;

use golink_store::domain::repositories::LinkRepository;
use golink_store::infrastructure::persistence::SqliteLinkRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_and_find(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = common::test_link("Foo.Bar", "https://example.com", "foo@bar.com");
    repo.save(&link).await.unwrap();

    let found = repo.find("Foo.Bar").await.unwrap();
    assert_eq!(found, Some(link));
}

#[sqlx::test]
async fn test_find_any_spelling(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = common::test_link("Foo.Bar", "https://example.com", "");
    repo.save(&link).await.unwrap();

    for spelling in ["foobar", "FOO-BAR", "foo.bar", " Foo Bar "] {
        let found = repo.find(spelling).await.unwrap();
        assert_eq!(found.as_ref(), Some(&link), "spelling {spelling:?}");
    }
}

#[sqlx::test]
async fn test_find_not_found(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let result = repo.find("missing").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_save_replaces_same_canonical_key(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.save(&common::test_link("foo-bar", "https://old.example.com", "old@example.com"))
        .await
        .unwrap();

    let mut replacement = common::test_link("Foo.Bar", "https://new.example.com", "new@example.com");
    replacement.last_edit = common::timestamp(1_800_000_000);
    repo.save(&replacement).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all, vec![replacement.clone()]);

    let found = repo.find("foobar").await.unwrap().unwrap();
    assert_eq!(found.short, "Foo.Bar");
    assert_eq!(found.long, "https://new.example.com");
    assert_eq!(found.owner, "new@example.com");
}

#[sqlx::test]
async fn test_find_all_empty(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let all = repo.find_all().await.unwrap();
    assert!(all.is_empty());
}

#[sqlx::test]
async fn test_find_by_owner_exact_match(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let mine = common::test_link("a", "https://a.example.com", "foo@bar.com");
    repo.save(&mine).await.unwrap();
    repo.save(&common::test_link("B-c", "https://b.example.com", "bar@foo.com "))
        .await
        .unwrap();
    repo.save(&common::test_link("d", "https://d.example.com", "FOO@bar.com"))
        .await
        .unwrap();

    let found = repo.find_by_owner("foo@bar.com").await.unwrap();
    assert_eq!(found, vec![mine]);

    let trimmed = repo.find_by_owner("bar@foo.com").await.unwrap();
    assert!(trimmed.is_empty());

    let nobody = repo.find_by_owner("foo1@bar.com").await.unwrap();
    assert!(nobody.is_empty());
}

#[sqlx::test]
async fn test_delete(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    repo.save(&common::test_link("B-c", "https://example.com", ""))
        .await
        .unwrap();

    assert!(repo.delete("bc").await.unwrap());
    assert!(repo.find("B-c").await.unwrap().is_none());

    // already gone
    assert!(!repo.delete("B-c").await.unwrap());
}

#[sqlx::test]
async fn test_save_all_later_entry_wins(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let links = vec![
        common::test_link("wiki", "https://wiki.example.com", ""),
        common::test_link("docs", "https://docs.example.com", ""),
        common::test_link("Wiki", "https://wiki2.example.com", ""),
    ];
    repo.save_all(&links).await.unwrap();

    let all = common::sorted(repo.find_all().await.unwrap());
    let want = common::sorted(vec![links[1].clone(), links[2].clone()]);
    assert_eq!(all, want);
}
