//! Catalog service implementation
//!
//! Every operation reads the full collection from storage, applies its change
//! and writes the full collection back. One async mutex spans that whole cycle,
//! so concurrent callers are linearized and no update is lost.

use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;

use shared::{
    Clock, ComponentId, MenuItem, MenuItemDraft, MenuItemId, MenuItemPatch, component_debug,
    component_info,
};
use crate::core::IdGenerator;
use crate::error::{CatalogError, CatalogResult};
use crate::traits::{CatalogStore, MenuStorage};

#[derive(Debug)]
struct CatalogInner<S> {
    storage: S,
    ids: IdGenerator,
}

/// Catalog store backed by a [`MenuStorage`]
#[derive(Debug)]
pub struct CatalogService<S> {
    inner: Arc<Mutex<CatalogInner<S>>>,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for CatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S: MenuStorage> CatalogService<S> {
    /// Open the catalog, failing fast if the existing data cannot be read
    pub async fn open(storage: S, clock: Arc<dyn Clock>) -> CatalogResult<Self> {
        let existing = storage.load().await?;
        let ids = IdGenerator::seeded(existing.iter().map(|item| item.id).max());

        component_info!(ComponentId::Catalog, "📚 Catalog opened with {} items", existing.len());

        Ok(Self {
            inner: Arc::new(Mutex::new(CatalogInner { storage, ids })),
            clock,
        })
    }
}

#[async_trait]
impl<S: MenuStorage> CatalogStore for CatalogService<S> {
    async fn list(&self) -> CatalogResult<Vec<MenuItem>> {
        let inner = self.inner.lock().await;
        inner.storage.load().await
    }

    async fn create(&self, draft: MenuItemDraft) -> CatalogResult<MenuItem> {
        let new_item = draft.validate()?;

        let mut inner = self.inner.lock().await;
        let mut items = inner.storage.load().await?;

        // The file may have been edited since startup
        for existing in &items {
            inner.ids.observe(existing.id);
        }
        let id = inner.ids.next_id(self.clock.utc_now());

        let created = MenuItem::from_new(id, new_item);
        items.push(created.clone());
        inner.storage.save(&items).await?;

        component_info!(ComponentId::Catalog, "➕ Created menu item {} '{}'", created.id, created.name);
        Ok(created)
    }

    async fn update(&self, id: MenuItemId, patch: MenuItemPatch) -> CatalogResult<MenuItem> {
        let changes = patch.validate()?;

        let inner = self.inner.lock().await;
        let mut items = inner.storage.load().await?;
        let position = items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;

        if changes.is_empty() {
            return Ok(items[position].clone());
        }

        items[position].apply(changes);
        let updated = items[position].clone();
        inner.storage.save(&items).await?;

        component_info!(ComponentId::Catalog, "✏️ Updated menu item {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: MenuItemId) -> CatalogResult<()> {
        let inner = self.inner.lock().await;
        let mut items = inner.storage.load().await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            component_debug!(ComponentId::Catalog, "Delete of unknown menu item {} ignored", id);
            return Ok(());
        }

        inner.storage.save(&items).await?;
        component_info!(ComponentId::Catalog, "🗑️ Deleted menu item {}", id);
        Ok(())
    }
}
