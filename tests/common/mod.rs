#![allow(dead_code)]

use advert_board::{app_router, AdvertStore, AppConfig, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// In-memory database on a single connection that never recycles, so every query sees
/// the same tables.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn store_on(pool: SqlitePool) -> AdvertStore {
    let store = AdvertStore::new(pool);
    store.ensure_schema().await.unwrap();
    store
}

pub async fn memory_store() -> AdvertStore {
    store_on(memory_pool().await).await
}

pub async fn test_app() -> Router {
    app_router(AppState::new(memory_store().await), &AppConfig::default())
}

pub async fn send(
    router: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    send_request(router, builder.body(body).unwrap()).await
}

pub async fn send_request(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
