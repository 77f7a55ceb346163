//! Log service layer

use crate::error::Result;
use crate::models::{CreateLogEvent, LogCountQuery, LogEvent};
use crate::repository::LogRepository;
use std::net::IpAddr;
use tracing::{debug, instrument};

/// Records log events and answers count queries
pub struct LogService<R: LogRepository> {
    repository: R,
}

impl<R: LogRepository> LogService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Store one event attributed to `client_ip`
    #[instrument(skip(self, create), fields(service = %create.service, tag = %create.tag))]
    pub async fn record(&self, create: CreateLogEvent, client_ip: IpAddr) -> Result<()> {
        let event = LogEvent::new(create, client_ip.to_string());
        self.repository.insert(event).await?;
        debug!(ip = %client_ip, "Log event stored");
        Ok(())
    }

    /// Exact count of events with the queried `service` and `tag`
    #[instrument(skip(self))]
    pub async fn count(&self, query: &LogCountQuery) -> Result<u64> {
        self.repository
            .count_matching(&query.service, &query.tag)
            .await
    }
}
