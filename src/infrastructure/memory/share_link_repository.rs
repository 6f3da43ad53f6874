//! In-memory implementation of the share link store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use tokio::sync::RwLock;

use crate::domain::entities::{NewShareableLink, ShareableLink};
use crate::domain::repositories::ShareLinkRepository;
use crate::error::AppError;

/// Process-lifetime link store.
///
/// Creation and resolution both take the write lock, so the vacancy check
/// and the insert, like the lookup and the increment, happen in one critical
/// section.
#[derive(Default)]
pub struct InMemoryShareLinkRepository {
    links: RwLock<HashMap<String, ShareableLink>>,
}

impl InMemoryShareLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShareLinkRepository for InMemoryShareLinkRepository {
    async fn create(&self, new_link: NewShareableLink) -> Result<ShareableLink, AppError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.id) {
            Entry::Occupied(entry) => Err(AppError::conflict(
                "Share link id already exists",
                json!({ "id": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let link = ShareableLink::new(entry.key().clone(), new_link.package_id, Utc::now());
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn resolve(&self, id: &str) -> Result<Option<ShareableLink>, AppError> {
        let mut links = self.links.write().await;

        Ok(links.get_mut(id).map(|link| {
            link.record_view();
            link.clone()
        }))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.links.read().await.len())
    }
}
