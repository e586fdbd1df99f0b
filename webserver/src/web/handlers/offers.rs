//! Promotional view of the catalog at the current moment

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use catalog::{CatalogStore, PricedMenu};
use gateway::RecipeGateway;
use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

#[derive(Debug, Deserialize)]
pub struct OffersParams {
    #[serde(default = "default_group_size")]
    pub group_size: u32,
}

fn default_group_size() -> u32 {
    1
}

/// GET /api/offers?group_size=N
pub async fn current_offers<C, G>(
    State(server): State<WebServer<C, G>>,
    params: Result<Query<OffersParams>, QueryRejection>,
) -> WebServerResult<Json<PricedMenu>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let Query(params) = params?;
    let items = server.catalog.list().await?;
    let moment = server.clock.local_now();

    Ok(Json(server.engine.evaluate_menu(&items, moment, params.group_size)))
}
