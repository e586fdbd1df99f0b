//! Menu catalog CRUD handlers

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};

use catalog::{CatalogError, CatalogStore};
use gateway::RecipeGateway;
use shared::{ComponentId, MenuItem, MenuItemDraft, MenuItemId, MenuItemPatch, component_debug};
use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// GET /api/menu
pub async fn list_menu<C, G>(
    State(server): State<WebServer<C, G>>,
) -> WebServerResult<Json<Vec<MenuItem>>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    Ok(Json(server.catalog.list().await?))
}

/// POST /api/menu
pub async fn create_menu_item<C, G>(
    State(server): State<WebServer<C, G>>,
    body: Result<Json<MenuItemDraft>, JsonRejection>,
) -> WebServerResult<Json<MenuItem>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let Json(draft) = body?;
    Ok(Json(server.catalog.create(draft).await?))
}

/// PUT /api/menu/:id
///
/// An id that is not a valid identifier cannot match any item.
pub async fn update_menu_item<C, G>(
    State(server): State<WebServer<C, G>>,
    Path(raw_id): Path<String>,
    body: Result<Json<MenuItemPatch>, JsonRejection>,
) -> WebServerResult<Json<MenuItem>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let id: MenuItemId = raw_id.parse().map_err(|_| CatalogError::not_found(&raw_id))?;
    let Json(patch) = body?;
    Ok(Json(server.catalog.update(id, patch).await?))
}

/// DELETE /api/menu/:id
pub async fn delete_menu_item<C, G>(
    State(server): State<WebServer<C, G>>,
    Path(raw_id): Path<String>,
) -> WebServerResult<&'static str>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    match raw_id.parse::<MenuItemId>() {
        Ok(id) => server.catalog.delete(id).await?,
        Err(_) => {
            component_debug!(ComponentId::WebServer, "Delete with unparsable id '{}' ignored", raw_id);
        }
    }
    Ok("Item deleted")
}
