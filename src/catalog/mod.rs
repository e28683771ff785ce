//! Catalog module - product models, service and store diagnostics

pub mod diagnostics;
pub mod models;
pub mod service;

pub use diagnostics::Diagnostics;
pub use models::{NewProduct, Product, DEFAULT_CATEGORY};
pub use service::{CatalogService, PRODUCT_COLLECTION};
