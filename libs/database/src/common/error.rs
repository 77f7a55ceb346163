use std::time::Duration;

/// Unified database error type for all database operations
///
/// This provides a consistent error interface across MongoDB and Redis.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Redis-specific errors
    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// MongoDB-specific errors
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Connection could not be verified
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection was not established within the startup bound
    #[error("Connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_timeout_message_includes_duration() {
        let err = DatabaseError::ConnectTimeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "Connection timed out after 10s");
    }
}
