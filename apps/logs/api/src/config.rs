use axum_helpers::RateLimitConfig;
use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::mongodb::MongoConfig;
use database::redis::RedisConfig;
use domain_logs::{DEFAULT_DATABASE, LogStoreConfig};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub log_store: LogStoreConfig,
    pub redis: RedisConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let log_store = LogStoreConfig::from_env()?;
        let mongodb = MongoConfig::from_env_with_database(DEFAULT_DATABASE)?
            .cap_server_selection(log_store.max_server_selection_timeout());
        let redis = RedisConfig::from_env()?;
        let rate_limit = RateLimitConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            mongodb,
            log_store,
            redis,
            rate_limit,
        })
    }
}
