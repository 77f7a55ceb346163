//! MongoDB implementation of LogRepository

use crate::config::LogStoreConfig;
use crate::error::{Result, StoreError};
use crate::models::LogEvent;
use crate::repository::LogRepository;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::{Collection, Database, IndexModel};
use std::future::Future;
use std::time::Duration;
use tracing::{error, instrument};

/// MongoDB-based log repository
///
/// Every call is bounded by the configured operation timeout.
#[derive(Clone)]
pub struct MongoLogRepository {
    collection: Collection<LogEvent>,
    operation_timeout: Duration,
}

impl MongoLogRepository {
    pub fn new(database: &Database, config: &LogStoreConfig) -> Self {
        Self {
            collection: database.collection(&config.collection),
            operation_timeout: config.operation_timeout(),
        }
    }

    /// Create the `{service, tag}` index used by counting
    pub async fn create_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { "service": 1, "tag": 1 })
            .build();

        self.bounded("create_indexes", async {
            self.collection.create_index(index).await.map(|_| ())
        })
        .await
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T>
    where
        F: Future<Output = mongodb::error::Result<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result.map_err(|e| {
                let err = StoreError::from(e);
                error!(operation, error = %err, "Event store operation failed");
                err
            }),
            Err(_) => {
                error!(operation, timeout = ?self.operation_timeout, "Event store operation timed out");
                Err(StoreError::Timeout {
                    operation,
                    after: self.operation_timeout,
                })
            }
        }
    }
}

#[async_trait]
impl LogRepository for MongoLogRepository {
    #[instrument(skip(self, event), fields(service = %event.service, tag = %event.tag))]
    async fn insert(&self, event: LogEvent) -> Result<()> {
        self.bounded("insert", async {
            self.collection.insert_one(&event).await.map(|_| ())
        })
        .await
    }

    #[instrument(skip(self))]
    async fn count_matching(&self, service: &str, tag: &str) -> Result<u64> {
        let filter = doc! { "service": service, "tag": tag };
        self.bounded("count", async {
            self.collection.count_documents(filter).await
        })
        .await
    }
}
