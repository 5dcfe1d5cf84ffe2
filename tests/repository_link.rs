mod common;

use links::domain::repositories::LinkRepository;
use links::infrastructure::persistence::PgLinkRepository;
use links::utils::id_generator::generate_id;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_save_new_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let link = repo.save_link("http://new.com").await.unwrap();

    assert_eq!(link.url, "http://new.com");
    assert_eq!(link.id.len(), 24);
    assert!(link.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_existing_link_returns_stored_id(pool: PgPool) {
    common::seed_test_link(&pool).await;
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let link = repo.save_link(common::SEEDED_URL).await.unwrap();

    assert_eq!(link.id, common::SEEDED_ID);
    assert_eq!(link.url, common::SEEDED_URL);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_save_same_url_twice(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));

    let first = repo.save_link("https://twice.example").await.unwrap();
    let second = repo.save_link("https://twice.example").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_concurrent_saves_share_one_link(pool: PgPool) {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.save_link("https://race.example").await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }

    ids.dedup();
    assert_eq!(ids.len(), 1);
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_urls_are_stored_verbatim(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let plain = repo.save_link("http://test.com").await.unwrap();
    let slash = repo.save_link("http://test.com/").await.unwrap();

    assert_ne!(plain.id, slash.id);
    assert_eq!(slash.url, "http://test.com/");
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    common::seed_test_link(&pool).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_id(common::SEEDED_ID).await.unwrap();

    assert_eq!(link.unwrap().url, common::SEEDED_URL);
    assert!(repo.find_by_id("000000000000000000000000").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_url(pool: PgPool) {
    common::seed_test_link(&pool).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_url(common::SEEDED_URL).await.unwrap();

    assert_eq!(link.unwrap().id, common::SEEDED_ID);
    assert!(repo.find_by_url("http://other.com").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_and_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.list().await.unwrap().is_empty());
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.save_link("https://a.example").await.unwrap();
    repo.save_link("https://b.example").await.unwrap();

    let urls: Vec<String> = repo.list().await.unwrap().into_iter().map(|l| l.url).collect();
    assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    assert_eq!(repo.count().await.unwrap(), 2);
}

#[sqlx::test]
async fn test_save_long_url(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let path: String = (0..200).map(|_| generate_id()).collect();
    let url = format!("https://example.com/{}", path);
    assert!(url.len() > 4096);

    let first = repo.save_link(&url).await.unwrap();
    let second = repo.save_link(&url).await.unwrap();

    assert_eq!(first.url, url);
    assert_eq!(first, second);
    assert_eq!(repo.find_by_url(&url).await.unwrap(), Some(first));
    assert_eq!(common::count_links(&pool).await, 1);
}
