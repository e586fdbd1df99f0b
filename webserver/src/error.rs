//! WebServer error types and their HTTP mapping

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use catalog::CatalogError;
use gateway::GatewayError;
use shared::{ComponentId, component_error, component_warn};

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WebServerResult<T> = Result<T, WebServerError>;

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Catalog(CatalogError::Validation(_)) => StatusCode::BAD_REQUEST,
            WebServerError::Catalog(CatalogError::NotFound { .. }) => StatusCode::NOT_FOUND,
            WebServerError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebServerError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebServerError::InvalidBody(_) | WebServerError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            WebServerError::Config { .. } | WebServerError::ServerStartup(_) | WebServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Machine-readable error kind used in response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            WebServerError::Catalog(CatalogError::Validation(_)) => "validation_error",
            WebServerError::Catalog(CatalogError::NotFound { .. }) => "not_found",
            WebServerError::Catalog(_) => "storage_error",
            WebServerError::Gateway(_) => "upstream_error",
            WebServerError::InvalidBody(_) => "invalid_body",
            WebServerError::InvalidQuery(_) => "invalid_query",
            WebServerError::Config { .. } | WebServerError::ServerStartup(_) | WebServerError::Io(_) => {
                "internal_error"
            }
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            component_error!(ComponentId::WebServer, error_kind = self.kind(), "❌ Request failed: {}", message);
        } else {
            component_warn!(ComponentId::WebServer, error_kind = self.kind(), "Request rejected: {}", message);
        }

        let body = Json(json!({
            "error": self.kind(),
            "message": message,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ValidationError;

    #[test]
    fn test_status_mapping() {
        let validation: WebServerError =
            CatalogError::from(ValidationError::EmptyField { field: "name" }).into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.kind(), "validation_error");

        let missing: WebServerError = CatalogError::not_found(7).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let upstream: WebServerError = GatewayError::Timeout { seconds: 10 }.into();
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.kind(), "upstream_error");

        let corrupt: WebServerError = CatalogError::Corrupt {
            path: "data.json".to_string(),
            source: serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        }
        .into();
        assert_eq!(corrupt.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(corrupt.kind(), "storage_error");
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = WebServerError::from(CatalogError::not_found(42)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "not_found");
        assert!(body["message"].as_str().unwrap().contains("42"));
    }
}
