//! Menu catalog store and promotion engine
//!
//! The store owns menu item persistence and serializes every operation behind
//! one lock; the promotion engine is a pure calculation over items and a
//! moment in time.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

// Re-export main types
pub use error::{CatalogError, CatalogResult};
pub use traits::{CatalogStore, MenuStorage};

pub use crate::core::{IdGenerator, PricedItem, PricedMenu, PromotionEngine, PromotionRules};
pub use services::{CatalogService, InMemoryStorage, JsonFileStorage};
