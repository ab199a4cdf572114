//! Catalog API - REST server for products, reviews, and mock checkout

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    // Connect to MongoDB with retry; a failed connection degrades the API
    // rather than aborting startup
    let mongo_client = match &config.mongodb {
        Some(mongo) => {
            info!("Connecting to MongoDB at {}", mongo.url);
            match database::mongodb::connect_from_config_with_retry(mongo, None).await {
                Ok(client) => {
                    info!(
                        "Successfully connected to MongoDB database: {}",
                        mongo.database
                    );
                    Some(client)
                }
                Err(e) => {
                    warn!("MongoDB connection failed, starting in degraded mode: {e}");
                    None
                }
            }
        }
        None => None,
    };

    let db = match (&mongo_client, &config.mongodb) {
        (Some(client), Some(mongo)) => Some(client.database(&mongo.database)),
        _ => None,
    };

    // Initialize the application state
    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Build router with API routes
    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    // Merge health endpoints
    let app = router.merge(health_router(state.config.app.clone()));

    info!("Starting Catalog API with production-ready shutdown (30s timeout)");

    // Production-ready server with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = state.mongo_client {
                info!("Shutting down: closing MongoDB connections");
                // MongoDB client closes automatically on drop
                drop(client);
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
