//! External recipe gateway
//!
//! Proxies search queries to the upstream recipe source and turns the
//! records it returns into menu item candidates ready for the catalog.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;

pub use error::{GatewayError, GatewayResult};
pub use traits::{PricingStrategy, RecipeGateway};

pub use crate::core::{DEFAULT_PERK, FALLBACK_CATEGORY, parse_search_payload, to_import_candidate};
pub use services::{FixedPlaceholder, MealDbGateway, RangeSampled};
