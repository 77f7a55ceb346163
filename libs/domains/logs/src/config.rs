//! Log store settings

use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::time::Duration;

/// Database used when none is configured
pub const DEFAULT_DATABASE: &str = "AD-Service";

/// Collection used when none is configured
pub const DEFAULT_COLLECTION: &str = "logs";

/// Per-operation bound, in seconds
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 5;

/// Where log events live and how long a single operation may take
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogStoreConfig {
    pub collection: String,
    pub operation_timeout_secs: u64,
}

impl LogStoreConfig {
    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    /// Longest server selection that still fails before the operation bound
    ///
    /// A fifth of the operation timeout is left as margin, so an unreachable
    /// store is reported as unavailable instead of timed out.
    pub fn max_server_selection_timeout(&self) -> Duration {
        let bound = self.operation_timeout();
        bound - bound / 5
    }
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            collection: DEFAULT_COLLECTION.to_string(),
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
        }
    }
}

impl FromEnv for LogStoreConfig {
    /// Reads `MONGODB_COLLECTION` and `MONGODB_OPERATION_TIMEOUT_SECS`
    fn from_env() -> Result<Self, ConfigError> {
        let operation_timeout_secs =
            env_parse_or("MONGODB_OPERATION_TIMEOUT_SECS", DEFAULT_OPERATION_TIMEOUT_SECS)?;
        if operation_timeout_secs == 0 {
            return Err(ConfigError::ParseError {
                key: "MONGODB_OPERATION_TIMEOUT_SECS".to_string(),
                details: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            collection: env_or_default("MONGODB_COLLECTION", DEFAULT_COLLECTION),
            operation_timeout_secs,
        })
    }
}
