//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::http::server::AppState;

/// GET /health - 200 "OK" when the store answers, 503 otherwise
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    if state.service.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
