//! Admin Poster Routes
//!
//! Endpoints for admin posters, mounted under `/api/admin`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::AppState;
use crate::models::poster::{CreatePoster, UpdatePoster, COLLECTION};

pub fn poster_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/poster", post(create_poster))
        .route("/poster/{id}", patch(update_poster).delete(delete_poster))
        .route("/posters", get(list_posters))
        .with_state(state)
}

async fn create_poster(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePoster>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document()?;
    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Poster created successfully", stored)),
    ))
}

async fn list_posters(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let posters = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Posters fetched successfully",
        posters,
    )))
}

async fn update_poster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePoster>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let patch = payload.into_patch()?;
    let updated = state
        .store
        .update_by_id(COLLECTION, &id, patch)?
        .ok_or_else(|| ApiError::NotFound("Poster not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Poster updated successfully",
        updated,
    )))
}

async fn delete_poster(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let removed = state
        .store
        .delete_by_id(COLLECTION, &id)?
        .ok_or_else(|| ApiError::NotFound("Poster not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Poster deleted successfully",
        removed,
    )))
}
