//! Trait definitions with mockall annotations for testing
//!
//! The storage trait is the persistence seam under `CatalogService`; the
//! store trait is the contract every caller of the catalog programs against.

use async_trait::async_trait;
use shared::{MenuItem, MenuItemDraft, MenuItemId, MenuItemPatch};

use crate::error::CatalogResult;

/// Whole-collection persistence
///
/// The full item list is the unit of persistence: `save` replaces everything
/// previously stored, and a missing backing store loads as an empty catalog.
#[mockall::automock]
#[async_trait]
pub trait MenuStorage: Send + Sync {
    /// Read the complete collection
    async fn load(&self) -> CatalogResult<Vec<MenuItem>>;

    /// Replace the complete collection
    async fn save(&self, items: &[MenuItem]) -> CatalogResult<()>;
}

/// Catalog store contract
#[mockall::automock]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All stored items, in creation order
    async fn list(&self) -> CatalogResult<Vec<MenuItem>>;

    /// Validate a draft, assign a fresh id and persist it
    async fn create(&self, draft: MenuItemDraft) -> CatalogResult<MenuItem>;

    /// Merge the supplied fields onto an existing item
    ///
    /// # Errors
    /// `NotFound` if no item has `id`, `Validation` for malformed fields.
    async fn update(&self, id: MenuItemId, patch: MenuItemPatch) -> CatalogResult<MenuItem>;

    /// Remove an item; unknown ids succeed without changing anything
    async fn delete(&self, id: MenuItemId) -> CatalogResult<()>;
}
