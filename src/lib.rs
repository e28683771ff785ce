//! DreamCraft service
//!
//! A product catalog backed by an optional document store, plus a
//! deterministic placeholder art generator, served over HTTP.

pub mod api;
pub mod art;
pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store;

pub use error::{AppError, Result};

use std::sync::Arc;

use art::{ArtProvider, PlaceholderProvider};
use catalog::CatalogService;
use store::DocumentStore;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub catalog: CatalogService,
    pub art: Arc<dyn ArtProvider>,
}

impl AppState {
    /// Build state around an already selected store, using the placeholder art provider
    pub fn new(settings: config::Settings, store: Arc<dyn DocumentStore>) -> Self {
        Self::with_provider(settings, store, Arc::new(PlaceholderProvider))
    }

    pub fn with_provider(
        settings: config::Settings,
        store: Arc<dyn DocumentStore>,
        art: Arc<dyn ArtProvider>,
    ) -> Self {
        Self {
            settings: Arc::new(settings),
            catalog: CatalogService::new(store),
            art,
        }
    }
}
