//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with the OpenAPI document and tracing
//! - Health and readiness helpers
//! - Graceful shutdown coordination
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_production_app(app, &server_config, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_production_app, create_router};
pub use health::{
    HEALTH_CHECK_TIMEOUT, HealthCheckFuture, HealthResponse, health_router, run_health_checks,
    run_health_checks_within,
};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
