//! Logs API routes
//!
//! Wires the logs domain to MongoDB and puts the rate limiter in front of it.

use crate::state::AppState;
use axum::{Router, middleware};
use axum_helpers::{QuotaTracker, rate_limit_middleware};
use domain_logs::{LogRepository, LogService, LogStoreConfig, MongoLogRepository};
use std::sync::Arc;
use tracing::info;

/// Create the rate-limited logs router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let repository = MongoLogRepository::new(&state.db, &state.config.log_store);
    limited_routes(repository, state.quota.clone())
}

/// Logs routes over any repository, each request admitted by `quota` first
pub fn limited_routes<R: LogRepository + 'static>(repository: R, quota: QuotaTracker) -> Router {
    domain_logs::logs_router()
        .with_state(Arc::new(LogService::new(repository)))
        .route_layer(middleware::from_fn_with_state(quota, rate_limit_middleware))
}

/// Initialize log indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database, config: &LogStoreConfig) -> eyre::Result<()> {
    MongoLogRepository::new(db, config)
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create log indexes: {}", e))?;
    info!(collection = %config.collection, "Log collection indexes created");
    Ok(())
}
