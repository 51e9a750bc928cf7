//! Dashboard Image Routes
//!
//! Endpoints for expert dashboard images, mounted under `/api/ra-dashboard`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::AppState;
use crate::models::dashboard_image::{CreateDashboardImage, UpdateDashboardImage, COLLECTION};

pub fn dashboard_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/image", post(create_image))
        .route("/image/{id}", patch(update_image).delete(delete_image))
        .route("/images", get(list_images))
        .route("/images/{expert_id}", get(list_images_by_expert))
        .with_state(state)
}

async fn create_image(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateDashboardImage>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document()?;
    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Image created successfully", stored)),
    ))
}

async fn list_images(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let images = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Images fetched successfully",
        images,
    )))
}

/// Owner-filtered listing: zero matches is a 404, unlike the global list.
async fn list_images_by_expert(
    State(state): State<Arc<AppState>>,
    Path(expert_id): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let images = state
        .store
        .find_eq(COLLECTION, "expertId", &json!(expert_id))?;
    if images.is_empty() {
        return Err(ApiError::NotFound(
            "No images found for this expert".to_string(),
        ));
    }
    Ok(Json(ApiResponse::new(
        "Images fetched successfully",
        images,
    )))
}

async fn update_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateDashboardImage>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let patch = payload.into_patch()?;
    let updated = state
        .store
        .update_by_id(COLLECTION, &id, patch)?
        .ok_or_else(|| ApiError::NotFound("Image not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Image updated successfully",
        updated,
    )))
}

async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let removed = state
        .store
        .delete_by_id(COLLECTION, &id)?
        .ok_or_else(|| ApiError::NotFound("Image not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Image deleted successfully",
        removed,
    )))
}
