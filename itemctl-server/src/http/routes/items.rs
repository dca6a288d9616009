//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{ItemPathName, ValidJson};
use crate::http::server::AppState;
use crate::models::{CreateItemRequest, Item, UpdateNumberRequest};

/// Acknowledgement body for deletes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/items - list all items
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.service.list().await?;
    Ok(Json(items))
}

/// POST /api/items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/items/{name} - delete an item by name
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemPathName(name): ItemPathName,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.delete(&name).await?;
    Ok(Json(MessageResponse {
        message: format!("Item '{}' deleted successfully.", name),
    }))
}

/// PUT /api/items/{name} - replace an item's number
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemPathName(name): ItemPathName,
    ValidJson(req): ValidJson<UpdateNumberRequest>,
) -> Result<Json<Item>, ApiError> {
    let item = state.service.update_number(&name, req).await?;
    Ok(Json(item))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{name}", put(update_item).delete(delete_item))
}
