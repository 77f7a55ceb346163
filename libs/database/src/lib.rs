//! Database library providing connectors and utilities for MongoDB and Redis
//!
//! The log service keeps its events in MongoDB and its quota counters in
//! Redis. This crate owns how those connections are configured, opened
//! (with a bounded startup timeout), and health checked.
//!
//! # Features
//!
//! - `redis` (default) - Redis support
//! - `mongodb` - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All of the above
//!
//! # Examples
//!
//! ## Redis
//!
//! ```ignore
//! use database::redis::{self, RedisConfig};
//! use redis::AsyncCommands;
//!
//! let mut conn = redis::connect_from_config(&RedisConfig::new("redis://127.0.0.1:6379")).await?;
//! conn.incr::<_, _, i64>("hits", 1).await?;
//! ```
//!
//! ## MongoDB
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "AD-Service");
//! let client = mongodb::connect_from_config(&config).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;

#[cfg(feature = "redis")]
pub mod redis;

#[cfg(feature = "mongodb")]
pub mod mongodb;

pub use common::{DatabaseError, DatabaseResult};
