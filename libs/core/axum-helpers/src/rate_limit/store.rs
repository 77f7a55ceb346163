//! Counter stores backing the quota tracker.

use async_trait::async_trait;
use dashmap::DashMap;
use redis::aio::ConnectionManager;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Counter state after one increment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCount {
    /// Hits recorded in the current window, including this one
    pub count: u64,
    /// Time until the window resets
    pub ttl: Duration,
}

#[derive(Debug, Error)]
pub enum CounterStoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Unexpected counter reply: {0}")]
    UnexpectedReply(String),

    #[error("Counter store did not answer within {0:?}")]
    Timeout(Duration),
}

impl CounterStoreError {
    /// Connection-level failures worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            CounterStoreError::Redis(e) => {
                e.is_io_error() || e.is_timeout() || e.is_connection_dropped()
            }
            CounterStoreError::Timeout(_) => true,
            CounterStoreError::UnexpectedReply(_) => false,
        }
    }
}

/// Atomic increment-with-expiry keyed by string.
///
/// The first increment of a key starts its window; the store expires the key
/// when the window elapses.
#[async_trait]
pub trait CounterStore: Send + Sync {
    async fn increment(&self, key: &str, window: Duration)
    -> Result<WindowCount, CounterStoreError>;
}

// INCR and window start in one round trip. A key left without a TTL (e.g. by
// a crash between commands in older deployments) gets one on the next hit.
const INCREMENT_SCRIPT: &str = r"
local count = redis.call('INCR', KEYS[1])
local ttl = redis.call('PTTL', KEYS[1])
if count == 1 or ttl < 0 then
    redis.call('PEXPIRE', KEYS[1], ARGV[1])
    ttl = tonumber(ARGV[1])
end
return {count, ttl}
";

/// Redis-backed counters shared by every instance of the service.
#[derive(Clone)]
pub struct RedisCounterStore {
    conn: ConnectionManager,
    script: redis::Script,
}

impl RedisCounterStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self {
            conn,
            script: redis::Script::new(INCREMENT_SCRIPT),
        }
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn increment(
        &self,
        key: &str,
        window: Duration,
    ) -> Result<WindowCount, CounterStoreError> {
        let mut conn = self.conn.clone();
        let window_ms = window.as_millis() as u64;

        let mut invocation = self.script.key(key);
        invocation.arg(window_ms);
        let (count, ttl_ms): (i64, i64) = invocation.invoke_async(&mut conn).await?;

        let count = u64::try_from(count)
            .map_err(|_| CounterStoreError::UnexpectedReply(format!("count {}", count)))?;
        let ttl = Duration::from_millis(ttl_ms.max(0) as u64);

        Ok(WindowCount { count, ttl })
    }
}

#[derive(Clone, Copy, Debug)]
struct Window {
    count: u64,
    resets_at: Instant,
}

/// Increments between sweeps of expired windows
pub const DEFAULT_SWEEP_INTERVAL: u64 = 1024;

/// In-process counters for tests and single-instance development.
///
/// Expired windows are dropped every `sweep_interval` increments, so memory
/// tracks the clients seen in the current window rather than every client
/// ever seen.
#[derive(Debug)]
pub struct MemoryCounterStore {
    windows: DashMap<String, Window>,
    increments: AtomicU64,
    sweep_interval: u64,
}

impl Default for MemoryCounterStore {
    fn default() -> Self {
        Self {
            windows: DashMap::new(),
            increments: AtomicU64::new(0),
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sweep after every `interval` increments (at least 1)
    pub fn with_sweep_interval(mut self, interval: u64) -> Self {
        self.sweep_interval = interval.max(1);
        self
    }

    /// Windows currently held, expired ones included until the next sweep
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn sweep_expired(&self, now: Instant) {
        self.windows.retain(|_, window| window.resets_at > now);
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn increment(
        &self,
        key: &str,
        window: Duration,
    ) -> Result<WindowCount, CounterStoreError> {
        let now = Instant::now();

        // Must run before taking the entry guard below; retain locks every shard.
        let seen = self.increments.fetch_add(1, Ordering::Relaxed) + 1;
        if seen % self.sweep_interval == 0 {
            self.sweep_expired(now);
        }

        let mut entry = self.windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            resets_at: now + window,
        });

        if entry.resets_at <= now {
            *entry = Window {
                count: 0,
                resets_at: now + window,
            };
        }
        entry.count += 1;

        Ok(WindowCount {
            count: entry.count,
            ttl: entry.resets_at - now,
        })
    }
}
