use super::config::{Rate, RateLimitConfig};
use super::store::{CounterStore, CounterStoreError, WindowCount};
use database::common::{RetryConfig, retry_with_backoff_when};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Upper bound for a single counter store round trip
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(1);

/// Outcome of an admission check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny,
}

/// Admission decision plus the quota figures reported to the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Admission {
    pub decision: Decision,
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp (seconds) at which the window resets
    pub reset: i64,
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        self.decision == Decision::Allow
    }
}

#[derive(Debug, Error)]
pub enum QuotaError {
    #[error("counter store unavailable: {0}")]
    Unavailable(#[source] CounterStoreError),
}

/// Fixed-window request quota per client key.
///
/// Every call increments the key's counter in the shared store. The first
/// `limit` calls in a window are allowed; later ones are denied until the
/// store expires the key. Each store round trip is bounded by
/// `store_timeout`; transient failures (timeouts included) are retried up to
/// `max_retry` times before surfacing [`QuotaError::Unavailable`].
#[derive(Clone)]
pub struct QuotaTracker {
    store: Arc<dyn CounterStore>,
    rate: Rate,
    prefix: String,
    retry: RetryConfig,
    store_timeout: Duration,
}

impl QuotaTracker {
    pub fn new(store: Arc<dyn CounterStore>, config: &RateLimitConfig) -> Self {
        Self {
            store,
            rate: config.rate,
            prefix: config.prefix.clone(),
            retry: RetryConfig::new()
                .with_max_retries(config.max_retry)
                .with_initial_delay(50)
                .with_max_delay(500),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    /// Store key for a client: `<prefix>:<client>`.
    pub fn key_for(&self, client_key: &str) -> String {
        format!("{}:{}", self.prefix, client_key)
    }

    #[instrument(skip(self))]
    pub async fn admit(&self, client_key: &str) -> Result<Admission, QuotaError> {
        let key = self.key_for(client_key);
        let window = self.rate.period;

        let hit = retry_with_backoff_when(
            || self.bounded_increment(&key, window),
            self.retry.clone(),
            CounterStoreError::is_transient,
        )
        .await
        .map_err(QuotaError::Unavailable)?;

        let limit = self.rate.limit;
        let decision = if hit.count > limit {
            Decision::Deny
        } else {
            Decision::Allow
        };
        let reset = (chrono::Utc::now()
            + chrono::Duration::milliseconds(hit.ttl.as_millis() as i64))
        .timestamp();

        debug!(count = hit.count, limit, ?decision, "Quota checked");

        Ok(Admission {
            decision,
            limit,
            remaining: limit.saturating_sub(hit.count),
            reset,
        })
    }

    async fn bounded_increment(
        &self,
        key: &str,
        window: Duration,
    ) -> Result<WindowCount, CounterStoreError> {
        match tokio::time::timeout(self.store_timeout, self.store.increment(key, window)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout = ?self.store_timeout, "Counter store did not answer");
                Err(CounterStoreError::Timeout(self.store_timeout))
            }
        }
    }
}
