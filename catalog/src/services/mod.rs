//! Service implementations
//!
//! Real implementations of the catalog traits for production use

pub mod catalog_service;
pub mod json_file_storage;
pub mod memory_storage;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use catalog_service::CatalogService;
pub use json_file_storage::JsonFileStorage;
pub use memory_storage::InMemoryStorage;
