pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// Returned for every error response:
/// - `code`: Integer error code for logging/monitoring (e.g., 2001)
/// - `error`: Machine-readable error identifier (e.g., "STORE_UNAVAILABLE")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1029,
///   "error": "RATE_LIMITED",
///   "message": "Limit exceeded"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Every per-request failure ends here; none of them stop the process.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Too Many Requests: {0}")]
    TooManyRequests(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store timeout: {0}")]
    StoreTimeout(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Quota unavailable: {0}")]
    QuotaUnavailable(String),
}

impl AppError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::QueryExtractorRejection(e) => e.status(),
            AppError::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StoreTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Store(_) => StatusCode::BAD_GATEWAY,
            AppError::QuotaUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Error code this error is reported with.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::JsonExtractorRejection(_) => ErrorCode::InvalidJson,
            AppError::QueryExtractorRejection(_) => ErrorCode::InvalidQuery,
            AppError::TooManyRequests(_) => ErrorCode::RateLimited,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            AppError::StoreTimeout(_) => ErrorCode::StoreTimeout,
            AppError::Store(_) => ErrorCode::StoreError,
            AppError::QuotaUnavailable(_) => ErrorCode::QuotaUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let message = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {}", e);
                e.body_text()
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "Query extraction error: {}", e);
                e.body_text()
            }
            AppError::TooManyRequests(msg) => {
                tracing::info!(error_code = code.code(), "Rate limited: {}", msg);
                code.default_message().to_string()
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                msg
            }
            // Driver messages stay in the logs.
            AppError::StoreUnavailable(msg)
            | AppError::StoreTimeout(msg)
            | AppError::Store(msg)
            | AppError::QuotaUnavailable(msg) => {
                tracing::error!(error_code = code.code(), "{}", msg);
                code.default_message().to_string()
            }
        };

        error_response(status, message, code)
    }
}

/// Helper function to create error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::TOO_MANY_REQUESTS,
///     "Limit exceeded".to_string(),
///     ErrorCode::RateLimited,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_store_errors_hide_driver_message() {
        let response =
            AppError::StoreUnavailable("server selection timeout: mongo:27017".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "STORE_UNAVAILABLE");
        assert_eq!(body["code"], 2001);
        assert_eq!(body["message"], "Event store is unavailable");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_store_timeout_is_gateway_timeout() {
        let response = AppError::StoreTimeout("insert exceeded 5s".into()).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body_json(response).await["error"], "STORE_TIMEOUT");
    }

    #[tokio::test]
    async fn test_too_many_requests_message() {
        let response = AppError::TooManyRequests("203.0.113.9".into()).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body_json(response).await["message"], "Limit exceeded");
    }

    #[test]
    fn test_quota_unavailable_is_distinct_from_denial() {
        let unavailable = AppError::QuotaUnavailable("redis down".into());
        let denied = AppError::TooManyRequests("203.0.113.9".into());
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_ne!(unavailable.error_code(), denied.error_code());
    }
}
