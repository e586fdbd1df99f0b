//! Import of an external recipe into the catalog

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use catalog::CatalogStore;
use gateway::{RecipeGateway, to_import_candidate};
use shared::{ComponentId, ExternalRecord, MenuItem, MenuItemDraft, component_info};
use crate::error::WebServerResult;
use crate::webserver_impl::WebServer;

/// POST /api/import
pub async fn import_recipe<C, G>(
    State(server): State<WebServer<C, G>>,
    body: Result<Json<ExternalRecord>, JsonRejection>,
) -> WebServerResult<Json<MenuItem>>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    let Json(record) = body?;
    let candidate = to_import_candidate(&record, server.pricing.as_ref());
    let created = server.catalog.create(MenuItemDraft::from(candidate)).await?;

    component_info!(
        ComponentId::WebServer,
        "📥 Imported recipe '{}' as menu item {}",
        record.name,
        created.id
    );
    Ok(Json(created))
}
