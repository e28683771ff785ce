//! Route table
//!
//! API routes are served both at the root and under `/api`.

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::api::handlers;
use crate::config::CorsConfig;
use crate::middleware::RateLimitLayer;
use crate::AppState;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/diagnostics", get(handlers::diagnostics))
        .route("/test", get(handlers::diagnostics))
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/generate-art", post(handlers::generate_art));

    let router = Router::new()
        .route("/", get(handlers::root))
        .merge(api.clone())
        .nest("/api", api);

    let rate_limit = &state.settings.rate_limit;
    let router = if rate_limit.enabled {
        router.layer(RateLimitLayer::new(
            rate_limit.requests_per_second,
            rate_limit.burst_size,
        ))
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.settings.cors))
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
