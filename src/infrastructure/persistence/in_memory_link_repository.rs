//! In-memory implementation of link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

#[derive(Default)]
struct Store {
    links: Vec<Link>,
    by_url: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
}

impl Store {
    fn insert(&mut self, link: Link) {
        let index = self.links.len();
        self.by_url.insert(link.url.clone(), index);
        self.by_id.insert(link.id.clone(), index);
        self.links.push(link);
    }
}

/// Link storage kept in process memory.
///
/// Behaves like [`crate::infrastructure::persistence::PgLinkRepository`]:
/// one link per URL, insertion-ordered listing. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    store: Mutex<Store>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with `links`.
    ///
    /// Later entries with an already seeded URL or id are skipped.
    pub fn with_links(links: impl IntoIterator<Item = Link>) -> Self {
        let mut store = Store::default();
        for link in links {
            if !store.by_url.contains_key(&link.url) && !store.by_id.contains_key(&link.id) {
                store.insert(link);
            }
        }
        Self {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn save_link(&self, url: &str) -> Result<Link, AppError> {
        let mut store = self.store();

        if let Some(&index) = store.by_url.get(url) {
            return Ok(store.links[index].clone());
        }

        let mut id = generate_id();
        while store.by_id.contains_key(&id) {
            id = generate_id();
        }

        let link = Link::new(id, url);
        store.insert(link.clone());

        Ok(link)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Link>, AppError> {
        let store = self.store();
        Ok(store.by_id.get(id).map(|&index| store.links[index].clone()))
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let store = self.store();
        Ok(store.by_url.get(url).map(|&index| store.links[index].clone()))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.store().links.clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store().links.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_new_link() {
        let repo = InMemoryLinkRepository::new();

        let link = repo.save_link("http://test.com").await.unwrap();

        assert!(!link.id.is_empty());
        assert_eq!(link.url, "http://test.com");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_existing_link_returns_seeded_id() {
        let repo = InMemoryLinkRepository::with_links([Link::new(
            "5a30508811d3b338a0b3f85c",
            "http://test.com",
        )]);

        let link = repo.save_link("http://test.com").await.unwrap();

        assert_eq!(link.id, "5a30508811d3b338a0b3f85c");
        assert_eq!(link.url, "http://test.com");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_twice_returns_same_id() {
        let repo = InMemoryLinkRepository::new();

        let first = repo.save_link("https://example.com").await.unwrap();
        let second = repo.save_link("https://example.com").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_urls_are_matched_exactly() {
        let repo = InMemoryLinkRepository::new();

        let plain = repo.save_link("http://test.com").await.unwrap();
        let slashed = repo.save_link("http://test.com/").await.unwrap();

        assert_ne!(plain.id, slashed.id);
    }

    #[tokio::test]
    async fn test_find_by_id_and_url() {
        let repo = InMemoryLinkRepository::new();
        let saved = repo.save_link("https://rust-lang.org").await.unwrap();

        assert_eq!(repo.find_by_id(&saved.id).await.unwrap(), Some(saved.clone()));
        assert_eq!(
            repo.find_by_url("https://rust-lang.org").await.unwrap(),
            Some(saved)
        );
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
        assert!(repo.find_by_url("https://missing.org").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = InMemoryLinkRepository::new();
        repo.save_link("https://a.example").await.unwrap();
        repo.save_link("https://b.example").await.unwrap();
        repo.save_link("https://a.example").await.unwrap();

        let urls: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.url)
            .collect();

        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_with_links_skips_duplicates() {
        let repo = InMemoryLinkRepository::with_links([
            Link::new("1", "https://a.example"),
            Link::new("2", "https://a.example"),
            Link::new("1", "https://b.example"),
        ]);

        assert_eq!(repo.store().links, vec![Link::new("1", "https://a.example")]);
    }
}
