//! HTTP document store client
//!
//! Speaks a JSON action API: every operation is a `POST {url}/action/<name>`
//! whose body names the database and collection.

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::StoreConfig;
use crate::store::traits::{id_to_string, Document, DocumentStore, StoreError, StoreStatus};

/// HTTP-backed document store
pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
    database: String,
}

#[derive(Debug, Serialize)]
struct FindRequest<'a> {
    database: &'a str,
    collection: &'a str,
    filter: Document,
}

#[derive(Debug, Serialize)]
struct InsertOneRequest<'a> {
    database: &'a str,
    collection: &'a str,
    document: Document,
}

#[derive(Debug, Serialize)]
struct ListCollectionsRequest<'a> {
    database: &'a str,
}

#[derive(Debug, Deserialize)]
struct FindResponse {
    #[serde(default)]
    documents: Vec<Document>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InsertOneResponse {
    inserted_id: Value,
}

#[derive(Debug, Deserialize)]
struct ListCollectionsResponse {
    #[serde(default)]
    collections: Vec<CollectionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionEntry {
    Name(String),
    Info { name: String },
}

impl CollectionEntry {
    fn into_name(self) -> String {
        match self {
            CollectionEntry::Name(name) | CollectionEntry::Info { name } => name,
        }
    }
}

impl HttpDocumentStore {
    /// Create a store client from configuration
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let base_url = config
            .url()
            .ok_or_else(|| StoreError::Unavailable("store URL is not set".to_string()))?
            .trim_end_matches('/')
            .to_string();
        let database = config
            .name()
            .ok_or_else(|| StoreError::Unavailable("database name is not set".to_string()))?
            .to_string();

        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key() {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| StoreError::Unavailable(format!("invalid API key header: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("api-key"), value);
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            database,
        })
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Post one action and decode its JSON reply
    async fn action<B, R>(&self, action: &str, body: &B) -> Result<R, StoreError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/action/{}", self.base_url, action);
        debug!(action = %action, database = %self.database, "Sending store request");

        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(action = %action, status = %status, "Store rejected request");
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Malformed(format!("{} response: {}", action, e)))
    }
}

/// Stamp store-owned timestamps onto a new document
fn with_timestamps(mut document: Document) -> Document {
    let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
    document
        .entry("created_at")
        .or_insert_with(|| now.clone());
    document.entry("updated_at").or_insert(now);
    document
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    fn status(&self) -> StoreStatus {
        StoreStatus::Available {
            database: self.database.clone(),
        }
    }

    async fn find(&self, collection: &str, filter: Document) -> Result<Vec<Document>, StoreError> {
        let request = FindRequest {
            database: &self.database,
            collection,
            filter,
        };
        let response: FindResponse = self.action("find", &request).await?;
        debug!(collection = %collection, count = response.documents.len(), "Fetched documents");
        Ok(response.documents)
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let request = InsertOneRequest {
            database: &self.database,
            collection,
            document: with_timestamps(document),
        };
        let response: InsertOneResponse = self.action("insertOne", &request).await?;
        Ok(id_to_string(&response.inserted_id))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let request = ListCollectionsRequest {
            database: &self.database,
        };
        let response: ListCollectionsResponse = self.action("listCollections", &request).await?;
        Ok(response
            .collections
            .into_iter()
            .map(CollectionEntry::into_name)
            .collect())
    }
}
