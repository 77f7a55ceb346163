#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_parse_or};

/// Redis connection settings
///
/// # Example
///
/// ```ignore
/// use database::redis::RedisConfig;
///
/// let config = RedisConfig::with_database("redis://127.0.0.1:6379", 0);
/// assert_eq!(config.build_url(), "redis://127.0.0.1:6379/0");
///
/// // From environment variables (requires `config` feature)
/// let config = RedisConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct RedisConfig {
    /// Server URL, with or without a database path
    pub url: String,

    /// Logical database appended to `url` when it carries no path
    pub database: Option<u8>,

    /// Upper bound for establishing the startup connection
    pub connect_timeout_secs: u64,
}

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

impl RedisConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    pub fn with_database(url: impl Into<String>, database: u8) -> Self {
        Self {
            database: Some(database),
            ..Self::new(url)
        }
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// Full connection URL with the database selected
    ///
    /// `redis://host:6379` with database 0 becomes `redis://host:6379/0`. A URL
    /// that already names a database is left alone.
    pub fn build_url(&self) -> String {
        let Some(database) = self.database else {
            return self.url.clone();
        };

        let base = self.url.trim_end_matches('/');
        let after_scheme = base.split_once("://").map_or(base, |(_, rest)| rest);
        if after_scheme.contains('/') {
            return self.url.clone();
        }

        format!("{}/{}", base, database)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self::new("redis://127.0.0.1:6379")
    }
}

/// Load RedisConfig from environment variables
///
/// - `REDIS_URL` or `REDIS_HOST` (required)
/// - `REDIS_DATABASE` (default: 0)
/// - `REDIS_CONNECT_TIMEOUT_SECS` (default: 10)
#[cfg(feature = "config")]
impl FromEnv for RedisConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_first_of(&["REDIS_URL", "REDIS_HOST"])?,
            database: Some(env_parse_or("REDIS_DATABASE", 0u8)?),
            connect_timeout_secs: env_parse_or(
                "REDIS_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        })
    }
}
