//! Feedback Routes
//!
//! Endpoints for user feedback, mounted under `/api`.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;

use super::errors::ApiResult;
use super::response::ApiResponse;
use super::AppState;
use crate::models::feedback::{CreateFeedback, COLLECTION};

pub fn feedback_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/feedback", get(list_feedback).post(create_feedback))
        .with_state(state)
}

async fn create_feedback(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateFeedback>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Value>>)> {
    let doc = payload.into_document()?;
    let stored = state.store.insert_one(COLLECTION, doc)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new("Feedback submitted successfully", stored)),
    ))
}

async fn list_feedback(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ApiResponse<Vec<Value>>>> {
    let entries = state.store.find_all(COLLECTION)?;
    Ok(Json(ApiResponse::new(
        "Feedback fetched successfully",
        entries,
    )))
}
