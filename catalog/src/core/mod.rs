//! Core catalog logic
//!
//! Pure business logic with no I/O dependencies; everything time-dependent
//! takes the moment as an argument.

pub mod ids;
pub mod promotions;

pub use ids::IdGenerator;
pub use promotions::{PricedItem, PricedMenu, PromotionEngine, PromotionRules};
