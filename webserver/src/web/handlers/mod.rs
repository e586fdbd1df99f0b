//! Route handlers, one module per resource

pub mod health;
pub mod import;
pub mod menu;
pub mod offers;
pub mod search;
