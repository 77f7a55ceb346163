//! Log repository trait

use crate::error::Result;
use crate::models::LogEvent;
use async_trait::async_trait;

/// Append-only storage of log events
#[async_trait]
pub trait LogRepository: Send + Sync {
    /// Store one event
    async fn insert(&self, event: LogEvent) -> Result<()>;

    /// Count events whose `service` and `tag` both equal the given values
    async fn count_matching(&self, service: &str, tag: &str) -> Result<u64>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub LogRepository {}

        #[async_trait]
        impl LogRepository for LogRepository {
            async fn insert(&self, event: LogEvent) -> Result<()>;
            async fn count_matching(&self, service: &str, tag: &str) -> Result<u64>;
        }
    }
}
