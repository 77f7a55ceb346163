use axum::Extension;
use axum_helpers::rate_limit::RedisCounterStore;
use axum_helpers::server::{create_production_app, create_router, health_router};
use axum_helpers::{QuotaTracker, TrustProxy};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::common::RetryConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

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

    // The service never serves traffic without its event store
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;
    let db = mongo_client.database(config.mongodb.database());
    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database()
    );

    api::logs::init_indexes(&db, &config.log_store).await?;

    let redis = database::redis::connect_from_config_with_retry(
        &config.redis,
        RetryConfig::new().with_max_retries(config.rate_limit.max_retry),
    )
    .await
    .map_err(|e| eyre::eyre!("Redis connection failed: {}", e))?;

    let store = Arc::new(RedisCounterStore::new(redis.clone()));
    let quota = QuotaTracker::new(store, &config.rate_limit);
    info!(
        rate = %config.rate_limit.rate,
        prefix = %config.rate_limit.prefix,
        "Rate limiter ready"
    );

    let state = AppState {
        config,
        mongo_client,
        db,
        redis,
        quota,
    };

    let api_routes = api::routes(&state);

    // Create a router with OpenAPI docs
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Health is merged outside the rate-limited routes
    let app = router
        .merge(health_router(state.config.app))
        .layer(Extension(TrustProxy(state.config.server.trust_proxy)));

    info!(
        trust_proxy = state.config.server.trust_proxy,
        "Starting Logs API with graceful shutdown (30s timeout)"
    );

    let server = state.config.server.clone();
    let AppState {
        mongo_client,
        redis,
        ..
    } = state;

    create_production_app(app, &server, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB and Redis connections");
        drop(redis);
        drop(mongo_client);
        info!("Connections closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Logs API shutdown complete");
    Ok(())
}
