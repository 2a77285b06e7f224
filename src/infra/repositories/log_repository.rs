//! Error-log repository implementation.

use async_trait::async_trait;
use mongodb::Collection;

use super::entities::ErrorLogDocument;
use crate::config::ERRORS_COLLECTION;
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Sink for server faults observed by the error-logging decorator.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LogErrorRepository: Send + Sync {
    /// Persist one failure detail.
    async fn log_error(&self, detail: &str) -> AppResult<()>;
}

/// MongoDB implementation of LogErrorRepository
pub struct LogErrorStore {
    collection: Collection<ErrorLogDocument>,
}

impl LogErrorStore {
    /// Create a repository over the `errors` collection.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ErrorLogDocument>(ERRORS_COLLECTION),
        }
    }
}

#[async_trait]
impl LogErrorRepository for LogErrorStore {
    #[tracing::instrument(skip_all)]
    async fn log_error(&self, detail: &str) -> AppResult<()> {
        self.collection
            .insert_one(ErrorLogDocument::now(detail))
            .await?;
        Ok(())
    }
}
