//! Store module - document store capability and its implementations

pub mod http_store;
pub mod traits;
pub mod unavailable;

pub use http_store::HttpDocumentStore;
pub use traits::{id_to_string, Document, DocumentStore, MockDocumentStore, StoreError, StoreStatus};
pub use unavailable::UnavailableStore;

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::StoreConfig;

/// Pick the store implementation once at startup.
///
/// Never fails: anything short of a usable client yields an
/// [`UnavailableStore`] and the catalog degrades.
pub fn connect(config: &StoreConfig) -> Arc<dyn DocumentStore> {
    if !config.is_configured() {
        warn!("Document store is not configured; catalog will be read-only and empty");
        return Arc::new(UnavailableStore::not_configured());
    }

    match HttpDocumentStore::new(config) {
        Ok(store) => {
            info!(database = %store.database(), "Document store client ready");
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "Failed to create document store client");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}
