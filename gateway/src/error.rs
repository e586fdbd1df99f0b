//! Gateway error types

use thiserror::Error;

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Upstream failures; every variant is reported to clients as a server error
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Recipe source unreachable: {message}")]
    Network { message: String },

    #[error("Recipe source did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Recipe source returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Recipe source sent an unreadable payload: {message}")]
    Malformed { message: String },
}

impl GatewayError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed { message: message.into() }
    }
}
