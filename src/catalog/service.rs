//! Catalog service
//!
//! Reads degrade to an empty catalog whenever the store fails; writes
//! propagate the failure so a submitted product is never silently dropped.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::models::{NewProduct, Product};
use crate::store::{Document, DocumentStore, StoreError};

/// Collection holding product documents
pub const PRODUCT_COLLECTION: &str = "product";

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn DocumentStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// List every product. Never fails: store errors yield an empty list.
    pub async fn list_products(&self) -> Vec<Product> {
        match self.fetch_products().await {
            Ok(products) => {
                debug!(count = products.len(), "Listed products");
                products
            }
            Err(e) => {
                warn!(error = %e, "Product listing degraded to empty catalog");
                Vec::new()
            }
        }
    }

    async fn fetch_products(&self) -> Result<Vec<Product>, StoreError> {
        let documents = self.store.find(PRODUCT_COLLECTION, Document::new()).await?;
        documents.iter().map(Product::from_document).collect()
    }

    /// Persist a validated product and return its new identifier
    pub async fn create_product(&self, product: NewProduct) -> Result<String, StoreError> {
        let id = self
            .store
            .insert_one(PRODUCT_COLLECTION, product.into_document())
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create product");
                e
            })?;

        info!(id = %id, "Created product");
        Ok(id)
    }
}
