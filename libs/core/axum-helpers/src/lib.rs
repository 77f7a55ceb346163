//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Client address resolution, JSON/query extractors with structured rejections
//! - **[`rate_limit`]**: Fixed-window request quotas backed by a shared counter store
//! - **[`server`]**: Router assembly, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(api_routes);
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod rate_limit;
pub mod server;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, OPENAPI_PATH, ShutdownCoordinator, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{AppJson, AppQuery, ClientIp, TrustProxy};

// Re-export rate limiting
pub use rate_limit::{QuotaTracker, RateLimitConfig, rate_limit_middleware};
