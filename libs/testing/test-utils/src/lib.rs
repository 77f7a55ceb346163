//! Shared test utilities
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestRedis`: Redis container with automatic cleanup (feature: "redis")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//!
//! Container-backed tests need a Docker daemon; mark them `#[ignore]` so the
//! default `cargo test` run stays hermetic.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { workspace = true, features = ["mongo", "redis"] }
//! ```
//!
//! ```rust,ignore
//! use test_utils::{TestMongo, TestDataBuilder};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_mongo_test");
//!     let db = mongo.client().database(&builder.database());
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "redis")]
mod redis;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

#[cfg(feature = "redis")]
pub use redis::TestRedis;

/// Builder for test data with deterministic randomization
///
/// Seeding from the test name keeps names stable across runs while keeping
/// tests that share a container apart.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_count_after_insert");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this test
    pub fn database(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// Service name unique to this test, e.g. `auth-1234`
    pub fn service(&self, name: &str) -> String {
        format!("{}-{}", name, self.seed)
    }

    /// Documentation-range IPv4 address (203.0.113.0/24) derived from the seed
    pub fn ip(&self, index: u8) -> String {
        let last = (self.seed as u8).wrapping_add(index);
        format!("203.0.113.{}", last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::from_test_name("my_test");
        let builder2 = TestDataBuilder::from_test_name("my_test");

        assert_eq!(builder1.database(), builder2.database());
        assert_eq!(builder1.service("auth"), builder2.service("auth"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.database(), builder2.database());
    }

    #[test]
    fn test_ip_is_valid() {
        let builder = TestDataBuilder::new(255);
        let ip: std::net::Ipv4Addr = builder.ip(1).parse().unwrap();
        assert_eq!(ip.octets()[..3], [203, 0, 113]);
    }
}
