//! Expert Image Routes
//!
//! Endpoints for the expert image revision, mounted under `/api/expert`.
//! This kind carries the system's one uniqueness constraint: `imageName`.
//! The pre-checks here are advisory; the store's unique index decides races.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::AppState;
use crate::models::expert_image::{
    CreateExpertImage, UpdateExpertImage, COLLECTION, UNIQUE_FIELD,
};

pub fn expert_image_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/image", post(create_image))
        .route("/image/{id}", patch(update_image).delete(delete_image))
        .route("/images", get(list_images))
        .route("/images/{expert_id}", get(list_images_by_expert))
        .with_state(state)
}

async fn create_image(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateExpertImage>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document()?;

    // Advisory duplicate check before the write.
    if let Some(name) = doc.get(UNIQUE_FIELD).and_then(Value::as_str) {
        if state
            .store
            .exists_eq(COLLECTION, UNIQUE_FIELD, &json!(name), None)?
        {
            return Err(ApiError::duplicate(UNIQUE_FIELD, name));
        }
    }

    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Expert image created successfully", stored)),
    ))
}

async fn list_images(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let images = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Expert images fetched successfully",
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
        "Expert images fetched successfully",
        images,
    )))
}

async fn update_image(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateExpertImage>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let patch = payload.into_patch()?;

    // Re-check uniqueness excluding the record being updated.
    if let Some(name) = UpdateExpertImage::patched_image_name(&patch) {
        if state
            .store
            .exists_eq(COLLECTION, UNIQUE_FIELD, &json!(name), Some(&id))?
        {
            return Err(ApiError::duplicate(UNIQUE_FIELD, name));
        }
    }

    let updated = state
        .store
        .update_by_id(COLLECTION, &id, patch)?
        .ok_or_else(|| ApiError::NotFound("Expert image not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Expert image updated successfully",
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
        .ok_or_else(|| ApiError::NotFound("Expert image not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Expert image deleted successfully",
        removed,
    )))
}
