//! Application state management.
//!
//! Everything handlers and health checks need is constructed once in `main`
//! and passed down explicitly.

use axum_helpers::QuotaTracker;
use database::redis::ConnectionManager;
use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client, the Redis connection manager and the
/// quota tracker all share their underlying pools.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// Database holding the log collection
    pub db: Database,
    /// Redis connection backing the rate limiter
    pub redis: ConnectionManager,
    /// Per-client request quotas
    pub quota: QuotaTracker,
}
