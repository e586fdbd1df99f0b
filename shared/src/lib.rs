//! Shared types for the menu catalog service
//!
//! Contains the catalog data model, the validation error taxonomy, the clock
//! abstraction and logging helpers used by every crate in the workspace.

pub mod clock;
pub mod errors;
pub mod logging;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::*;
pub use logging::ComponentId;
pub use types::*;
