use redis::aio::ConnectionManager;
use tracing::debug;

use crate::common::DatabaseError;

/// Check Redis health with `PING`
///
/// # Example
/// ```ignore
/// use database::redis::check_health;
///
/// if let Err(e) = check_health(&mut conn.clone()).await {
///     tracing::warn!(error = %e, "Redis unhealthy");
/// }
/// ```
pub async fn check_health(conn: &mut ConnectionManager) -> Result<(), DatabaseError> {
    debug!("Running Redis health check");

    let response: String = redis::cmd("PING")
        .query_async(conn)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("Redis PING failed: {}", e)))?;

    if response != "PONG" {
        return Err(DatabaseError::HealthCheckFailed(format!(
            "Redis PING returned unexpected response: {}",
            response
        )));
    }

    Ok(())
}
