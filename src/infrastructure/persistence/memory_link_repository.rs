//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    links: HashMap<String, Link>,
    last_created_at: Option<DateTime<Utc>>,
}

/// Process-local link store.
///
/// Follows the same contract as [`super::PgLinkRepository`]: duplicate codes are
/// rejected on insert, lists are newest first, and deletes are permanent.
/// Contents are lost when the process exits.
///
/// # Use Cases
///
/// - Integration tests that exercise the full router without PostgreSQL
/// - Local demos (`STORAGE=memory`)
#[derive(Default)]
pub struct InMemoryLinkRepository {
    store: RwLock<Store>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut store = self.store.write().await;

        if store.links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        // Creation timestamps are strictly increasing so list order is total.
        let mut created_at = Utc::now();
        if let Some(last) = store.last_created_at
            && created_at <= last
        {
            created_at = last + Duration::microseconds(1);
        }
        store.last_created_at = Some(created_at);

        let link = Link::new(new_link.code, new_link.target_url, 0, created_at, None);
        store.links.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.store.read().await.links.get(code).cloned())
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.store.read().await.links.contains_key(code))
    }

    async fn list(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.store.read().await.links.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.store.read().await.links.len() as i64)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.store.write().await.links.remove(code).is_some())
    }

    async fn record_click(&self, code: &str) -> Result<bool, AppError> {
        let mut store = self.store.write().await;

        match store.links.get_mut(code) {
            Some(link) => {
                link.clicks += 1;
                link.last_clicked = Some(Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
