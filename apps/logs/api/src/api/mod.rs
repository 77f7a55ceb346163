//! API routes module
//!
//! Log routes sit at the root (`/logs`, `/logs/count`) behind the rate
//! limiter; `/ready` is not limited.

pub mod health;
pub mod logs;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(logs::router(state))
        .merge(health::router(state.clone()))
}
