use core_config::{ConfigError, FromEnv, env_or_default, env_parse_or};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Requests allowed per fixed window.
///
/// Parsed from the formatted notation `<limit>-<period>`, where period is
/// `S` (second), `M` (minute), `H` (hour) or `D` (day): `"50-H"` allows 50
/// requests per hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rate {
    pub limit: u64,
    pub period: Duration,
}

impl Rate {
    pub fn new(limit: u64, period: Duration) -> Self {
        Self { limit, period }
    }

    pub fn per_hour(limit: u64) -> Self {
        Self::new(limit, Duration::from_secs(60 * 60))
    }
}

impl FromStr for Rate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (limit, period) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("'{}' is not in <limit>-<period> format", s))?;

        let limit: u64 = limit
            .trim()
            .parse()
            .map_err(|e| format!("invalid limit '{}': {}", limit, e))?;
        if limit == 0 {
            return Err("limit must be greater than zero".to_string());
        }

        let secs = match period.trim().to_ascii_uppercase().as_str() {
            "S" => 1,
            "M" => 60,
            "H" => 60 * 60,
            "D" => 24 * 60 * 60,
            other => return Err(format!("unknown period '{}', expected S, M, H or D", other)),
        };

        Ok(Self::new(limit, Duration::from_secs(secs)))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per {:?}", self.limit, self.period)
    }
}

/// Quota settings for the admission middleware.
#[derive(Clone, Debug)]
pub struct RateLimitConfig {
    pub rate: Rate,
    /// Namespace for counter keys: `<prefix>:<client>`
    pub prefix: String,
    /// Retries against the counter store before giving up
    pub max_retry: u32,
}

pub const DEFAULT_RATE: &str = "50-H";
pub const DEFAULT_PREFIX: &str = "AD_Service_limiter";
pub const DEFAULT_MAX_RETRY: u32 = 3;

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            rate: Rate::per_hour(50),
            prefix: DEFAULT_PREFIX.to_string(),
            max_retry: DEFAULT_MAX_RETRY,
        }
    }
}

/// Environment variables:
/// - `RATE_LIMIT` (default: `50-H`)
/// - `RATE_LIMIT_PREFIX` (default: `AD_Service_limiter`)
/// - `RATE_LIMIT_MAX_RETRY` (default: 3)
impl FromEnv for RateLimitConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env_or_default("RATE_LIMIT", DEFAULT_RATE);
        let rate = raw.parse().map_err(|details| ConfigError::ParseError {
            key: "RATE_LIMIT".to_string(),
            details,
        })?;

        Ok(Self {
            rate,
            prefix: env_or_default("RATE_LIMIT_PREFIX", DEFAULT_PREFIX),
            max_retry: env_parse_or("RATE_LIMIT_MAX_RETRY", DEFAULT_MAX_RETRY)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formatted_rates() {
        assert_eq!("50-H".parse::<Rate>().unwrap(), Rate::per_hour(50));
        assert_eq!(
            "1000-m".parse::<Rate>().unwrap(),
            Rate::new(1000, Duration::from_secs(60))
        );
        assert_eq!(
            " 5-S ".parse::<Rate>().unwrap(),
            Rate::new(5, Duration::from_secs(1))
        );
        assert_eq!(
            "7-D".parse::<Rate>().unwrap().period,
            Duration::from_secs(86_400)
        );
    }

    #[test]
    fn test_reject_malformed_rates() {
        assert!("50".parse::<Rate>().is_err());
        assert!("fifty-H".parse::<Rate>().is_err());
        assert!("50-W".parse::<Rate>().is_err());
        assert!("0-H".parse::<Rate>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("RATE_LIMIT", None::<&str>),
                ("RATE_LIMIT_PREFIX", None),
                ("RATE_LIMIT_MAX_RETRY", None),
            ],
            || {
                let config = RateLimitConfig::from_env().unwrap();
                assert_eq!(config.rate, Rate::per_hour(50));
                assert_eq!(config.prefix, "AD_Service_limiter");
                assert_eq!(config.max_retry, 3);
            },
        );
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_vars(
            [
                ("RATE_LIMIT", Some("1000-H")),
                ("RATE_LIMIT_PREFIX", Some("logs")),
                ("RATE_LIMIT_MAX_RETRY", Some("5")),
            ],
            || {
                let config = RateLimitConfig::from_env().unwrap();
                assert_eq!(config.rate.limit, 1000);
                assert_eq!(config.prefix, "logs");
                assert_eq!(config.max_retry, 5);
            },
        );
    }

    #[test]
    fn test_config_invalid_rate() {
        temp_env::with_var("RATE_LIMIT", Some("lots"), || {
            let err = RateLimitConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("RATE_LIMIT"));
        });
    }
}
