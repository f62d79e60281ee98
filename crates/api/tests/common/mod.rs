#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use notes_api::config::ServerConfig;
use notes_api::router::build_app_router;
use notes_api::state::AppState;
use notes_core::notes::CategoryPolicy;
use notes_db::store::{MemoryNotesStore, NotesStore};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and the in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        category_policy: CategoryPolicy::default(),
        seed_sample_data: false,
        json_logs: false,
    }
}

/// A fresh in-memory store holding only the fallback category.
pub fn new_store() -> Arc<dyn NotesStore> {
    Arc::new(MemoryNotesStore::new())
}

/// Build the full application router over `store`.
///
/// Goes through the same [`build_app_router`] as `main.rs`, so tests
/// exercise the production middleware stack.
pub fn build_test_app(store: Arc<dyn NotesStore>) -> Router {
    build_test_app_with(store, test_config())
}

/// Like [`build_test_app`] with a custom configuration.
pub fn build_test_app_with(store: Arc<dyn NotesStore>, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a category through the API and return its id.
pub async fn create_category(store: &Arc<dyn NotesStore>, name: &str, color: &str) -> i64 {
    let response = post_json(
        build_test_app(store.clone()),
        "/api/categories",
        serde_json::json!({ "name": name, "color": color }),
    )
    .await;
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a note through the API and return the created JSON.
pub async fn create_note(
    store: &Arc<dyn NotesStore>,
    title: &str,
    description: &str,
    category_id: serde_json::Value,
) -> serde_json::Value {
    let response = post_json(
        build_test_app(store.clone()),
        "/api/notes",
        serde_json::json!({
            "title": title,
            "description": description,
            "category_id": category_id,
        }),
    )
    .await;
    body_json(response).await
}
