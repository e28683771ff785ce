//! Common traits and types for document stores

use async_trait::async_trait;
use mockall::automock;
use serde_json::{Map, Value};
use thiserror::Error;

/// A raw document as returned by the store
pub type Document = Map<String, Value>;

/// Failure reaching or querying the document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store rejected request ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("malformed store data: {0}")]
    Malformed(String),
}

/// Availability of a store handle, fixed when the handle is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    /// Connected to the named database
    Available { database: String },
    /// No usable handle; `reason` says why
    Unavailable { reason: String },
}

impl StoreStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, StoreStatus::Available { .. })
    }
}

/// Document/collection persistence
#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Report whether this handle can reach a store at all
    fn status(&self) -> StoreStatus;

    /// Fetch every document in `collection` matching `filter`
    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError>;

    /// Insert one document, returning the identifier the store assigned
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Names of the collections in the configured database
    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Render a store identifier as text.
///
/// Accepts plain strings, extended-JSON object ids (`{"$oid": "..."}`)
/// and falls back to the JSON rendering for anything else.
pub fn id_to_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        Value::Object(map) => match map.get("$oid") {
            Some(Value::String(oid)) => oid.clone(),
            _ => id.to_string(),
        },
        other => other.to_string(),
    }
}
