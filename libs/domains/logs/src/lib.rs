//! Logs Domain
//!
//! Tagged service events submitted over HTTP and counted by exact
//! `(service, tag)` match.
//!
//! # Architecture
//!
//! ```text
//! POST /logs ───────► LogService::record ──► LogRepository::insert ─────────┐
//!                                                                           ▼
//! GET /logs/count ──► LogService::count ───► LogRepository::count_matching ─► MongoDB
//! ```
//!
//! Both routes expect the rate-limit layer from `axum_helpers::rate_limit`
//! in front of them; this crate does not apply it.

use utoipa::OpenApi;

mod config;
mod error;
mod handlers;
mod models;
mod mongodb;
mod repository;
mod service;

pub use config::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_OPERATION_TIMEOUT_SECS, LogStoreConfig,
};
pub use error::{Result, StoreError};
pub use handlers::{LogsState, logs_router};
pub use models::{CountResponse, CreateLogEvent, LogCountQuery, LogEvent};
pub use mongodb::MongoLogRepository;
pub use repository::LogRepository;
pub use service::LogService;

/// OpenAPI documentation for the Logs API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_log, handlers::count_logs),
    components(
        schemas(CreateLogEvent, CountResponse, axum_helpers::ErrorResponse),
        responses(
            axum_helpers::errors::responses::BadRequestResponse,
            axum_helpers::errors::responses::TooManyRequestsResponse,
            axum_helpers::errors::responses::ServiceUnavailableResponse,
            axum_helpers::errors::responses::GatewayTimeoutResponse,
        )
    ),
    tags(
        (name = "logs", description = "Rate-limited log ingestion and counting")
    )
)]
pub struct ApiDoc;
