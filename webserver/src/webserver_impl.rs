//! Main webserver implementation
//!
//! `WebServer` bundles the injected collaborators and is itself the axum
//! router state; handlers live under `web::handlers`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use axum::Router;
use axum::routing::{get, post, put};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use catalog::{CatalogStore, PromotionEngine};
use gateway::{PricingStrategy, RecipeGateway};
use shared::{Clock, ComponentId, component_info};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::web::handlers::{health, import, menu, offers, search};

/// HTTP server over a catalog store and a recipe gateway
pub struct WebServer<C, G> {
    pub(crate) state: Arc<WebServerState>,
    pub(crate) catalog: Arc<C>,
    pub(crate) gateway: Arc<G>,
    pub(crate) engine: Arc<PromotionEngine>,
    pub(crate) pricing: Arc<dyn PricingStrategy>,
    pub(crate) clock: Arc<dyn Clock>,
}

impl<C, G> Clone for WebServer<C, G> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            catalog: Arc::clone(&self.catalog),
            gateway: Arc::clone(&self.gateway),
            engine: Arc::clone(&self.engine),
            pricing: Arc::clone(&self.pricing),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C, G> WebServer<C, G>
where
    C: CatalogStore + 'static,
    G: RecipeGateway + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(
        bind_address: SocketAddr,
        catalog: C,
        gateway: G,
        engine: PromotionEngine,
        pricing: Arc<dyn PricingStrategy>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Arc::new(WebServerState::new(bind_address)),
            catalog: Arc::new(catalog),
            gateway: Arc::new(gateway),
            engine: Arc::new(engine),
            pricing,
            clock,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Catalog CRUD
            .route("/api/menu", get(menu::list_menu::<C, G>).post(menu::create_menu_item::<C, G>))
            .route(
                "/api/menu/:id",
                put(menu::update_menu_item::<C, G>).delete(menu::delete_menu_item::<C, G>),
            )
            // Recipe source
            .route("/api/search", get(search::search_recipes::<C, G>))
            .route("/api/search/candidates", get(search::search_candidates::<C, G>))
            .route("/api/import", post(import::import_recipe::<C, G>))
            // Promotions
            .route("/api/offers", get(offers::current_offers::<C, G>))
            // Health check
            .route("/health", get(health::health_check::<C, G>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", address, e)))?;

        self.state.set_running(true);
        component_info!(ComponentId::WebServer, "🌐 Menu API listening on http://{}", address);

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await;

        self.state.set_running(false);
        served.map_err(WebServerError::from)
    }
}
