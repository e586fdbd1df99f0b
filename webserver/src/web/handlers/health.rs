//! Liveness endpoint

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use catalog::CatalogStore;
use gateway::RecipeGateway;
use crate::webserver_impl::WebServer;

/// GET /health
pub async fn health_check<C, G>(State(server): State<WebServer<C, G>>) -> Json<Value>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptimeSeconds": server.state.get_uptime_seconds(),
    }))
}
