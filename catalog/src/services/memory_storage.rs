//! In-memory storage implementation
//!
//! Holds the catalog in process memory. Used by tests.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::RwLock;

use shared::MenuItem;
use crate::error::CatalogResult;
use crate::traits::MenuStorage;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    items: Arc<RwLock<Vec<MenuItem>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, bypassing the catalog writer
    pub async fn snapshot(&self) -> Vec<MenuItem> {
        self.items.read().await.clone()
    }
}

#[async_trait]
impl MenuStorage for InMemoryStorage {
    async fn load(&self) -> CatalogResult<Vec<MenuItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn save(&self, items: &[MenuItem]) -> CatalogResult<()> {
        let mut stored = self.items.write().await;
        *stored = items.to_vec();
        Ok(())
    }
}
