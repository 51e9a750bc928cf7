//! Banner Routes
//!
//! Endpoints for site banners, mounted under `/api`. Banner ids are
//! format-checked before any store access.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::AppState;
use crate::models::banner::{check_banner_id, CreateBanner, COLLECTION};

pub fn banner_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/banner", get(list_banners).post(create_banner))
        .route("/banner/{id}", get(get_banner).delete(delete_banner))
        .with_state(state)
}

async fn create_banner(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBanner>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document()?;
    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Banner created successfully", stored)),
    ))
}

async fn list_banners(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let banners = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Banners fetched successfully",
        banners,
    )))
}

async fn get_banner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    check_banner_id(&id)?;
    let banner = state
        .store
        .find_by_id(COLLECTION, &id)?
        .ok_or_else(|| ApiError::NotFound("Banner not found".to_string()))?;
    Ok(Json(ApiResponse::new("Banner fetched successfully", banner)))
}

async fn delete_banner(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    check_banner_id(&id)?;
    let removed = state
        .store
        .delete_by_id(COLLECTION, &id)?
        .ok_or_else(|| ApiError::NotFound("Banner not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Banner deleted successfully",
        removed,
    )))
}
