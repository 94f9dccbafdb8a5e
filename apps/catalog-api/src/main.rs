//! Catalog API - product catalog over MongoDB

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::{mongodb::connect_from_config_with_retry, RetryConfig};
use mongodb::Client;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Connect if the database is configured. Any failure leaves the service
/// running without a store.
async fn connect(config: &Config) -> Option<Client> {
    let Some(mongodb) = &config.mongodb else {
        warn!("DATABASE_URL or DATABASE_NAME not set, starting without a database");
        return None;
    };

    info!("Connecting to MongoDB at {}", mongodb.redacted_url());

    match connect_from_config_with_retry(mongodb, Some(RetryConfig::new().with_max_retries(5))).await {
        Ok(client) => {
            info!(
                "Successfully connected to MongoDB database: {}",
                mongodb.database()
            );
            Some(client)
        }
        Err(e) => {
            warn!(error = %e, "MongoDB unreachable, starting without a database");
            None
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let mongo_client = connect(&config).await;
    let state = AppState::new(config, mongo_client);

    api::products::seed(&state).await;

    let router = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state)).await?;
    let app = router
        .merge(api::root_routes(&state))
        .merge(health_router(state.config.app));

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
