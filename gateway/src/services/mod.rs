//! Service implementations for the gateway traits

pub mod meal_db;
pub mod pricing;

#[cfg(test)]
mod tests;

pub use meal_db::MealDbGateway;
pub use pricing::{FixedPlaceholder, RangeSampled};
