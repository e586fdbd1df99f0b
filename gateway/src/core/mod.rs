//! Pure gateway logic: payload parsing and import mapping

pub mod import;
pub mod payload;

pub use import::{DEFAULT_PERK, FALLBACK_CATEGORY, to_import_candidate};
pub use payload::parse_search_payload;
