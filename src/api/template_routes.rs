//! Message Template Routes
//!
//! Endpoints for message templates, mounted under `/api`. The GET on
//! `/template/{id}` treats the segment as the owner tag `raid` and is a
//! filtered listing; PATCH and DELETE on the same path address a template
//! by identity.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use super::errors::{ApiError, ApiResult};
use super::response::ApiResponse;
use super::AppState;
use crate::models::template::{CreateTemplate, UpdateTemplate, COLLECTION, OWNER_FIELD};

pub fn template_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/template", get(list_templates).post(create_template))
        .route(
            "/template/{id}",
            get(list_templates_by_raid)
                .patch(update_template)
                .delete(delete_template),
        )
        .with_state(state)
}

async fn create_template(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTemplate>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document();
    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Template created successfully", stored)),
    ))
}

async fn list_templates(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let templates = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Templates fetched successfully",
        templates,
    )))
}

/// Owner-filtered listing by `raid`: zero matches is a 404.
async fn list_templates_by_raid(
    State(state): State<Arc<AppState>>,
    Path(raid): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let templates = state.store.find_eq(COLLECTION, OWNER_FIELD, &json!(raid))?;
    if templates.is_empty() {
        return Err(ApiError::NotFound(
            "No templates found for this raid".to_string(),
        ));
    }
    Ok(Json(ApiResponse::new(
        "Templates fetched successfully",
        templates,
    )))
}

async fn update_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTemplate>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let patch = payload.into_patch()?;
    let updated = state
        .store
        .update_by_id(COLLECTION, &id, patch)?
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Template updated successfully",
        updated,
    )))
}

async fn delete_template(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let removed = state
        .store
        .delete_by_id(COLLECTION, &id)?
        .ok_or_else(|| ApiError::NotFound("Template not found".to_string()))?;
    Ok(Json(ApiResponse::new(
        "Template deleted successfully",
        removed,
    )))
}
