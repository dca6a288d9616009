//! Shared helpers for router tests

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use itemctl_server::db::{ItemStore, MemoryItemStore, StoreError};
use itemctl_server::models::{Item, ItemNumber, NewItem};
use itemctl_server::{build_router, ItemService, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store
pub fn memory_app() -> Router {
    app_with(Arc::new(MemoryItemStore::new()))
}

pub fn app_with(store: Arc<dyn ItemStore>) -> Router {
    build_router(ItemService::new(store), &ServerConfig::default())
}

/// Store whose every call fails, as if Postgres were unreachable
pub struct DownStore;

fn down() -> StoreError {
    StoreError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl ItemStore for DownStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Err(down())
    }
    async fn insert(&self, _: &NewItem) -> Result<Option<Item>, StoreError> {
        Err(down())
    }
    async fn delete(&self, _: &str) -> Result<bool, StoreError> {
        Err(down())
    }
    async fn update_number(&self, _: &str, _: ItemNumber) -> Result<Option<Item>, StoreError> {
        Err(down())
    }
    async fn ping(&self) -> Result<(), StoreError> {
        Err(down())
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap_or(Value::Null)
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    TestResponse {
        status,
        text: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

/// Send a JSON body with the given method
pub async fn json(app: &Router, method: Method, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, request).await
}
