//! Shared error types for the menu catalog service

use thiserror::Error;

/// Caller-side contract violations on menu item input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("field must not be empty: {field}")]
    EmptyField { field: &'static str },

    #[error("invalid price: {reason}")]
    InvalidPrice { reason: String },
}

impl ValidationError {
    pub fn invalid_price(reason: impl Into<String>) -> Self {
        Self::InvalidPrice { reason: reason.into() }
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
