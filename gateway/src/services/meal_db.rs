//! HTTP client for a MealDB-style recipe search endpoint

use std::time::Duration;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use shared::{ComponentId, ExternalRecord, component_debug, component_warn};
use crate::core::parse_search_payload;
use crate::error::{GatewayError, GatewayResult};
use crate::traits::RecipeGateway;

/// Name of the query parameter carrying the search text
const QUERY_PARAM: &str = "s";

/// Recipe gateway backed by a single search URL
#[derive(Debug, Clone)]
pub struct MealDbGateway {
    client: reqwest::Client,
    search_url: Url,
    timeout: Duration,
}

impl MealDbGateway {
    /// Create a gateway whose every request is bounded by `timeout`
    pub fn new(search_url: Url, timeout: Duration) -> GatewayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Network { message: e.to_string() })?;

        Ok(Self { client, search_url, timeout })
    }

    fn classify(&self, error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout { seconds: self.timeout.as_secs() }
        } else if error.is_decode() {
            GatewayError::malformed(error.to_string())
        } else {
            GatewayError::Network { message: error.to_string() }
        }
    }
}

#[async_trait]
impl RecipeGateway for MealDbGateway {
    async fn search_raw(&self, query: &str) -> GatewayResult<Value> {
        component_debug!(ComponentId::Gateway, "🔎 Searching recipes for '{}'", query);

        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[(QUERY_PARAM, query)])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            component_warn!(ComponentId::Gateway, "⚠️ Recipe source answered {}", status);
            return Err(GatewayError::UpstreamStatus { status: status.as_u16() });
        }

        let payload = response.json::<Value>().await.map_err(|e| self.classify(e))?;

        // Reject a payload whose result list cannot be read
        parse_search_payload(&payload)?;
        Ok(payload)
    }

    async fn search(&self, query: &str) -> GatewayResult<Vec<ExternalRecord>> {
        let payload = self.search_raw(query).await?;
        let records = parse_search_payload(&payload)?;

        component_debug!(ComponentId::Gateway, "Found {} recipes for '{}'", records.len(), query);
        Ok(records)
    }
}
