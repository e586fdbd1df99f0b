//! Recipe search handlers

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use catalog::CatalogStore;
use gateway::{RecipeGateway, to_import_candidate};
use shared::NewMenuItem;
use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub s: String,
}

/// GET /api/search?s=query
///
/// Upstream payload passed through untouched.
pub async fn search_recipes<C, G>(
    State(server): State<WebServer<C, G>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> WebServerResult<Json<Value>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let Query(params) = params?;
    Ok(Json(server.gateway.search_raw(&params.s).await?))
}

/// GET /api/search/candidates?s=query
pub async fn search_candidates<C, G>(
    State(server): State<WebServer<C, G>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> WebServerResult<Json<Vec<NewMenuItem>>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let Query(params) = params?;
    let records = server.gateway.search(&params.s).await?;

    let candidates = records
        .iter()
        .map(|record| to_import_candidate(record, server.pricing.as_ref()))
        .collect();
    Ok(Json(candidates))
}
