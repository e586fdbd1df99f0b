//! Catalog-specific error types

use thiserror::Error;
use shared::ValidationError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid menu item: {0}")]
    Validation(#[from] ValidationError),

    #[error("Menu item not found: {id}")]
    NotFound { id: String },

    #[error("Storage operation failed: {operation} on {path}")]
    Storage {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored catalog is corrupt: {path}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
