//! Store used when no document store can be reached

use async_trait::async_trait;

use crate::store::traits::{Document, DocumentStore, StoreError, StoreStatus};

/// A store handle that refuses every operation
#[derive(Debug, Clone)]
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The store settings are missing
    pub fn not_configured() -> Self {
        Self::new("store connection is not configured")
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Unavailable {
            reason: self.reason.clone(),
        }
    }

    async fn find(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        Err(self.error())
    }

    async fn insert_one(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<String, StoreError> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Err(self.error())
    }
}
