//! Readiness endpoint

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Create the readiness router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Readiness check - verifies MongoDB and Redis answer
async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    let mongo_client = state.mongo_client.clone();
    let mut redis = state.redis.clone();

    let mongodb: HealthCheckFuture<'_> = Box::pin(async move {
        if database::mongodb::check_health(&mongo_client).await {
            Ok(())
        } else {
            Err("ping failed".to_string())
        }
    });
    let redis: HealthCheckFuture<'_> = Box::pin(async move {
        database::redis::check_health(&mut redis)
            .await
            .map_err(|e| e.to_string())
    });

    run_health_checks(vec![("mongodb", mongodb), ("redis", redis)]).await
}
