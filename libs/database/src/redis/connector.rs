use redis::Client;
use redis::aio::ConnectionManager;
use std::time::Duration;
use tracing::{info, instrument};

use super::RedisConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Connect to Redis and return a ConnectionManager
///
/// The ConnectionManager reconnects on its own after the first connection
/// succeeds. The connection is verified with `PING`.
///
/// # Example
/// ```ignore
/// use database::redis::connect;
/// use redis::AsyncCommands;
///
/// let mut conn = connect("redis://127.0.0.1:6379/0").await?;
/// conn.incr::<_, _, i64>("hits", 1).await?;
/// ```
pub async fn connect(url: &str) -> redis::RedisResult<ConnectionManager> {
    info!("Connecting to Redis");

    let client = Client::open(url)?;
    let manager = ConnectionManager::new(client).await?;

    let mut conn = manager.clone();
    let _: String = redis::cmd("PING").query_async(&mut conn).await?;

    info!("Connected to Redis");
    Ok(manager)
}

/// Connect using a [`RedisConfig`], bounded by `connect_timeout_secs`
#[instrument(skip(config))]
pub async fn connect_from_config(config: &RedisConfig) -> DatabaseResult<ConnectionManager> {
    let bound = Duration::from_secs(config.connect_timeout_secs);
    let url = config.build_url();

    match tokio::time::timeout(bound, connect(&url)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(DatabaseError::ConnectTimeout(bound)),
    }
}

/// Connect from config, retrying failed attempts with backoff
///
/// Each attempt keeps its own connect bound.
pub async fn connect_from_config_with_retry(
    config: &RedisConfig,
    retry_config: RetryConfig,
) -> DatabaseResult<ConnectionManager> {
    retry_with_backoff(|| connect_from_config(config), retry_config).await
}
