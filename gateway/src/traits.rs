//! Gateway trait definitions for dependency injection

use async_trait::async_trait;
use serde_json::Value;

use shared::ExternalRecord;
use crate::error::GatewayResult;

/// Search access to the external recipe source
#[mockall::automock]
#[async_trait]
pub trait RecipeGateway: Send + Sync {
    /// Upstream payload exactly as received, once its result list is readable
    async fn search_raw(&self, query: &str) -> GatewayResult<Value>;

    /// Parsed result list, empty when the upstream has no matches
    async fn search(&self, query: &str) -> GatewayResult<Vec<ExternalRecord>>;
}

/// Source of the synthetic price given to imported items
///
/// Imported recipes carry no price of their own; whatever this returns is a
/// placeholder for staff to correct later.
pub trait PricingStrategy: Send + Sync {
    fn placeholder_price(&self) -> u64;
}
