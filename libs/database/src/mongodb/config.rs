#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_first_of, env_parse_or};
use std::time::Duration;

/// MongoDB connection settings
///
/// Built by hand or loaded from the environment (with the `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::with_database("mongodb://localhost:27017", "AD-Service");
///
/// // From environment variables, falling back to a database name
/// let config = MongoConfig::from_env_with_database("AD-Service")?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    pub database: String,

    /// Reported to the server in its connection logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,

    /// Upper bound for establishing the startup connection
    pub connect_timeout_secs: u64,

    /// How long an operation waits for a usable server before failing
    pub server_selection_timeout: Duration,
}

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 5;

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_database(url, "default")
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: database.into(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout: Duration::from_secs(DEFAULT_SERVER_SELECTION_TIMEOUT_SECS),
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Never wait longer than `bound` for server selection
    ///
    /// Callers that put their own deadline around each operation cap
    /// selection below it, so an unreachable server fails as a selection
    /// error rather than as the caller's timeout.
    pub fn cap_server_selection(mut self, bound: Duration) -> Self {
        self.server_selection_timeout = self.server_selection_timeout.min(bound);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Load from the environment, using `default_database` when neither
    /// `MONGODB_DATABASE` nor `MONGO_DATABASE` is set.
    ///
    /// Environment variables:
    /// - `MONGODB_URL`, `MONGO_URL` or `MONGO_HOST` (required)
    /// - `MONGODB_DATABASE` or `MONGO_DATABASE`
    /// - `MONGODB_APP_NAME`
    /// - `MONGODB_MAX_POOL_SIZE` (default: 100)
    /// - `MONGODB_CONNECT_TIMEOUT_SECS` (default: 10)
    /// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default: 5)
    #[cfg(feature = "config")]
    pub fn from_env_with_database(default_database: &str) -> Result<Self, ConfigError> {
        let url = env_first_of(&["MONGODB_URL", "MONGO_URL", "MONGO_HOST"])?;
        let database = env_first_of(&["MONGODB_DATABASE", "MONGO_DATABASE"])
            .unwrap_or_else(|_| default_database.to_string());

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse_or("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?,
            connect_timeout_secs: env_parse_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout: Duration::from_secs(env_parse_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?),
        })
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_database("default")
    }
}
