//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - a string identifier for clients (e.g., "RATE_LIMITED")
//! - an integer code for logging and monitoring (e.g., 1029)
//! - a default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::RateLimited;
//! assert_eq!(code.as_str(), "RATE_LIMITED");
//! assert_eq!(code.code(), 1029);
//! assert_eq!(code.default_message(), "Limit exceeded");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000-1499)
    /// Request body is not the expected JSON document
    InvalidJson,

    /// Query string could not be decoded
    InvalidQuery,

    /// Requested resource was not found
    NotFound,

    /// Route exists but not for this method
    MethodNotAllowed,

    /// Client exhausted its request quota for the current window
    RateLimited,

    // Server errors (1500-1999)
    /// An unexpected internal server error occurred
    InternalError,

    // Event store errors (2000-2999)
    /// The event store could not be reached in time
    StoreUnavailable,

    /// The event store accepted the operation but did not finish it in time
    StoreTimeout,

    /// The event store rejected the operation
    StoreError,

    // Quota errors (3000-3999)
    /// The quota counter store failed after all retries
    QuotaUnavailable,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier clients can match on.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidJson => "INVALID_JSON",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::RateLimited => "RATE_LIMITED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::StoreError => "STORE_ERROR",
            Self::QuotaUnavailable => "QUOTA_UNAVAILABLE",
        }
    }

    /// Integer code used in structured logs.
    ///
    /// Ranges:
    /// - 1000-1499: Client errors
    /// - 1500-1999: Server errors
    /// - 2000-2999: Event store errors
    /// - 3000-3999: Quota errors
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidJson => 1002,
            Self::InvalidQuery => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
            Self::RateLimited => 1029,

            Self::InternalError => 1500,

            Self::StoreUnavailable => 2001,
            Self::StoreTimeout => 2002,
            Self::StoreError => 2003,

            Self::QuotaUnavailable => 3001,
        }
    }

    /// Default user-facing message; handlers may override it.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::InvalidJson => "Invalid JSON format",
            Self::InvalidQuery => "Invalid query parameters",
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            Self::RateLimited => "Limit exceeded",
            Self::InternalError => "An internal server error occurred",
            Self::StoreUnavailable => "Event store is unavailable",
            Self::StoreTimeout => "Event store operation timed out",
            Self::StoreError => "Event store error occurred",
            Self::QuotaUnavailable => "Rate limiter is unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::RateLimited.as_str(), "RATE_LIMITED");
        assert_eq!(ErrorCode::StoreTimeout.as_str(), "STORE_TIMEOUT");
        assert_eq!(ErrorCode::QuotaUnavailable.as_str(), "QUOTA_UNAVAILABLE");
    }

    #[test]
    fn test_error_code_integer_ranges() {
        assert_eq!(ErrorCode::InvalidJson.code(), 1002);
        assert_eq!(ErrorCode::StoreUnavailable.code(), 2001);
        assert_eq!(ErrorCode::QuotaUnavailable.code(), 3001);
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let code = ErrorCode::StoreUnavailable;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }

    #[test]
    fn test_error_code_deserialization() {
        let code: ErrorCode = serde_json::from_str("\"RATE_LIMITED\"").unwrap();
        assert_eq!(code, ErrorCode::RateLimited);
    }
}
