//! Functional tests for the HTTP API

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use dreamcraft::{
    api::routes::create_router,
    art::data_url,
    catalog::Diagnostics,
    config::Settings,
    store::{DocumentStore, MockDocumentStore, StoreError, StoreStatus, UnavailableStore},
    AppState,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app_with(store: Arc<dyn DocumentStore>) -> Router {
    create_router(Arc::new(AppState::new(Settings::default(), store)))
}

fn offline_app() -> Router {
    app_with(Arc::new(UnavailableStore::not_configured()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let (status, body) = send(offline_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "DreamCraft Backend is live");

    for uri in ["/health", "/api/health"] {
        let (status, body) = send(offline_app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!({"status": "ok"}));
    }
}

#[tokio::test]
async fn test_generate_art_end_to_end() {
    let request = post_json(
        "/generate-art",
        json!({"prompt": "a glowing forest", "style": "neon", "aspect": "16:9"}),
    );
    let (status, body) = send(offline_app(), request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["provider"], "placeholder");
    assert_eq!(body["style"], "neon");
    assert_eq!(body["prompt"], "a glowing forest");

    let image = body["image"].as_str().unwrap();
    assert!(image.starts_with("data:image/svg+xml;base64,"));

    let svg = String::from_utf8(data_url::decode(image).unwrap()).unwrap();
    assert!(svg.contains(r#"width="1280" height="720""#));
    assert!(svg.contains("a glowing forest"));
}

#[tokio::test]
async fn test_generate_art_is_deterministic_and_defaults_style() {
    let body = json!({"prompt": "paper crane"});

    let (_, first) = send(offline_app(), post_json("/api/generate-art", body.clone())).await;
    let (_, second) = send(offline_app(), post_json("/api/generate-art", body)).await;
    assert_eq!(first, second);

    let first: Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(first["style"], "dreamy");

    let svg_bytes = data_url::decode(first["image"].as_str().unwrap()).unwrap();
    let svg = String::from_utf8(svg_bytes).unwrap();
    assert!(svg.contains(r#"width="1024" height="1024""#));
}

#[tokio::test]
async fn test_generate_art_requires_prompt() {
    let request = post_json("/generate-art", json!({"style": "ink"}));
    let (status, _) = send(offline_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_degrades_to_empty() {
    for uri in ["/products", "/api/products"] {
        let (status, body) = send(offline_app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
    }
}

#[tokio::test]
async fn test_default_settings_never_throttle_list_or_generate() {
    let app = offline_app();

    for _ in 0..250 {
        let (status, _) = send(app.clone(), get("/products")).await;
        assert_eq!(status, StatusCode::OK);
    }

    for _ in 0..10 {
        let (status, _) = send(
            app.clone(),
            post_json("/generate-art", json!({"prompt": "a quiet harbour"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_list_products_maps_documents() {
    let mut store = MockDocumentStore::new();
    store.expect_find().returning(|_, _| {
        Ok(vec![json!({"_id": "p1", "title": "Mug", "price": "12"})
            .as_object()
            .cloned()
            .unwrap()])
    });

    let (status, body) = send(app_with(Arc::new(store)), get("/products")).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body[0]["id"], "p1");
    assert_eq!(body[0]["price"], 12.0);
    assert_eq!(body[0]["category"], "craft");
}

#[tokio::test]
async fn test_negative_price_never_reaches_store() {
    let mut store = MockDocumentStore::new();
    store.expect_insert_one().times(0);

    let request = post_json(
        "/products",
        json!({"title": "Mug", "price": -1, "category": "ceramics"}),
    );
    let (status, body) = send(app_with(Arc::new(store)), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["error"]["type"], "invalid_request_error");
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let mut store = MockDocumentStore::new();
    store.expect_insert_one().times(0);
    let app = app_with(Arc::new(store));

    let request = post_json("/products", json!({"title": "Mug", "price": 3}));
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        app,
        post_json("/products", json!({"title": "", "price": 3, "category": "craft"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_returns_id() {
    let mut store = MockDocumentStore::new();
    store
        .expect_insert_one()
        .withf(|collection, document| {
            collection == "product" && document.get("category") == Some(&json!("ceramics"))
        })
        .times(1)
        .returning(|_, _| Ok("65a1f0c2e4b0a1b2c3d4e5f6".to_string()));

    let request = post_json(
        "/api/products",
        json!({
            "title": "Mug",
            "price": 18.5,
            "category": "ceramics",
            "image": "https://img/mug.png"
        }),
    );
    let (status, body) = send(app_with(Arc::new(store)), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(String::from_utf8(body).unwrap(), "65a1f0c2e4b0a1b2c3d4e5f6");
}

#[tokio::test]
async fn test_create_product_accepts_numeric_string_price() {
    let mut store = MockDocumentStore::new();
    store
        .expect_insert_one()
        .withf(|_, document| document.get("price") == Some(&json!(12.0)))
        .times(1)
        .returning(|_, _| Ok("p-12".to_string()));
    let app = app_with(Arc::new(store));

    let request = post_json(
        "/products",
        json!({"title": "Mug", "price": "12", "category": "ceramics"}),
    );
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(String::from_utf8(body).unwrap(), "p-12");

    let request = post_json(
        "/products",
        json!({"title": "Mug", "price": "twelve", "category": "ceramics"}),
    );
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_surfaces_store_failure() {
    let mut store = MockDocumentStore::new();
    store
        .expect_insert_one()
        .returning(|_, _| Err(StoreError::Unavailable("y".repeat(300))));

    let request = post_json(
        "/products",
        json!({"title": "Mug", "price": 18.5, "category": "ceramics"}),
    );
    let (status, body) = send(app_with(Arc::new(store)), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_slice(&body).unwrap();
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("Database not available: "));
    assert!(message.chars().count() <= "Database not available: ".len() + 80);
}

#[tokio::test]
async fn test_diagnostics_without_store() {
    for uri in ["/diagnostics", "/test"] {
        let (status, body) = send(offline_app(), get(uri)).await;
        assert_eq!(status, StatusCode::OK);

        let report: Diagnostics = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.backend, "Running");
        assert_eq!(report.database, "Not Available");
        assert_eq!(report.database_url, "Not Set");
        assert!(report.collections.is_empty());
    }
}

#[tokio::test]
async fn test_diagnostics_with_store() {
    let mut store = MockDocumentStore::new();
    store.expect_status().returning(|| StoreStatus::Available {
        database: "shop".into(),
    });
    store
        .expect_list_collection_names()
        .returning(|| Ok(vec!["product".to_string()]));

    let (status, body) = send(app_with(Arc::new(store)), get("/diagnostics")).await;
    assert_eq!(status, StatusCode::OK);

    let report: Diagnostics = serde_json::from_slice(&body).unwrap();
    assert_eq!(report.database, "Connected & Working");
    assert_eq!(report.connection_status, "Connected");
    assert_eq!(report.collections, vec!["product"]);
}
