//! Menu catalog webserver entry point

use std::sync::Arc;
use clap::Parser;
use tokio::signal;

use catalog::{CatalogService, JsonFileStorage, PromotionEngine};
use gateway::{FixedPlaceholder, MealDbGateway, PricingStrategy, RangeSampled};
use shared::{ComponentId, SystemClock, component_info, logging};
use webserver::{Args, WebServer, WebServerResult};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // Values from .env act as environment variables for clap
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    let config = args.into_config()?;

    logging::log_startup(ComponentId::WebServer, &format!("menu catalog on {}", config.bind_address));

    let clock = Arc::new(SystemClock);
    let catalog = CatalogService::open(JsonFileStorage::new(&config.data_file), clock.clone()).await?;
    component_info!(ComponentId::WebServer, "💾 Catalog file: {}", config.data_file.display());

    let gateway = MealDbGateway::new(config.recipe_api_url.clone(), config.upstream_timeout)?;
    component_info!(ComponentId::WebServer, "🍲 Recipe source: {}", config.recipe_api_url);

    let pricing: Arc<dyn PricingStrategy> = match config.placeholder_price {
        Some(price) => Arc::new(FixedPlaceholder(price)),
        None => Arc::new(RangeSampled::new()),
    };

    let webserver = WebServer::new(
        config.bind_address,
        catalog,
        gateway,
        PromotionEngine::new(config.rules),
        pricing,
        clock,
    );

    webserver.run(shutdown_signal()).await?;

    logging::log_success(ComponentId::WebServer, "WebServer stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => logging::log_shutdown(ComponentId::WebServer, "Received Ctrl+C signal"),
        Err(err) => {
            // Without a signal handler the server runs until killed
            logging::log_error(ComponentId::WebServer, "Signal handling", &err);
            std::future::pending::<()>().await;
        }
    }
}
