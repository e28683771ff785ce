//! Request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::art::{ArtRequest, ArtResult, ArtSpec};
use crate::catalog::{self, Diagnostics, NewProduct, Product};
use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness message
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "DreamCraft Backend is live".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Store connectivity report
pub async fn diagnostics(State(state): State<Arc<AppState>>) -> Json<Diagnostics> {
    let store = state.catalog.store().as_ref();
    Json(catalog::diagnostics::probe(store, &state.settings.store).await)
}

/// List products; an unreachable store yields an empty list
pub async fn list_products(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.catalog.list_products().await)
}

/// Create a product and answer with its new id as plain text
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, String)> {
    let Json(product) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    product.validate().map_err(AppError::Validation)?;

    let id = state
        .catalog
        .create_product(product)
        .await
        .map_err(|e| AppError::store_unavailable(&e))?;

    Ok((StatusCode::CREATED, id))
}

pub async fn generate_art(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ArtRequest>, JsonRejection>,
) -> Result<Json<ArtResult>> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    let spec = ArtSpec::from(request);

    info!(
        style = %spec.style,
        aspect = %spec.aspect,
        provider = %state.art.name(),
        "Generating art"
    );
    let result = state.art.generate(spec).await?;

    Ok(Json(result))
}
