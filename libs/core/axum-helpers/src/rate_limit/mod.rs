//! Shared request quotas.
//!
//! - [`config`]: formatted rates (`"50-H"`) and [`RateLimitConfig`]
//! - [`store`]: the [`CounterStore`] seam with Redis and in-memory backends
//! - [`tracker`]: [`QuotaTracker`], the fixed-window admission decision
//! - [`middleware`]: [`rate_limit_middleware`] for `from_fn_with_state`
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum_helpers::rate_limit::{QuotaTracker, RateLimitConfig, RedisCounterStore, rate_limit_middleware};
//! use core_config::FromEnv;
//!
//! let store = Arc::new(RedisCounterStore::new(redis_manager));
//! let tracker = QuotaTracker::new(store, &RateLimitConfig::from_env()?);
//!
//! let routes = log_routes.route_layer(axum::middleware::from_fn_with_state(tracker, rate_limit_middleware));
//! ```

pub mod config;
pub mod middleware;
pub mod store;
pub mod tracker;

pub use config::{Rate, RateLimitConfig};
pub use middleware::rate_limit_middleware;
pub use store::{CounterStore, CounterStoreError, MemoryCounterStore, RedisCounterStore, WindowCount};
pub use tracker::{Admission, Decision, QuotaError, QuotaTracker};
