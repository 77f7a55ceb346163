//! Log store error types

use axum_helpers::AppError;
use mongodb::error::ErrorKind;
use std::time::Duration;
use thiserror::Error;

/// Result type for log store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Event store failures
///
/// None of these stop the process; each becomes a 5xx response.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No server could be reached
    #[error("Event store unavailable: {message}")]
    Unavailable { message: String },

    /// The operation did not finish within its deadline
    #[error("Event store {operation} timed out after {after:?}")]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    /// The server answered with an error
    #[error("Event store error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<mongodb::error::Error>,
    },
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        let unreachable = matches!(
            *err.kind,
            ErrorKind::ServerSelection { .. }
                | ErrorKind::Io(_)
                | ErrorKind::ConnectionPoolCleared { .. }
        );

        if unreachable {
            Self::Unavailable {
                message: err.to_string(),
            }
        } else {
            Self::Database {
                message: err.to_string(),
                source: Some(err),
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { message } => AppError::StoreUnavailable(message),
            StoreError::Timeout { .. } => AppError::StoreTimeout(err.to_string()),
            StoreError::Database { message, .. } => AppError::Store(message),
        }
    }
}

impl axum::response::IntoResponse for StoreError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
