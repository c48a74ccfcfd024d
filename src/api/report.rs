use crate::models::AppState;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;

// Read-only view over the last completed analysis.
pub async fn last_report_handler(State(state): State<Arc<AppState>>) -> Response {
    match state.store.latest() {
        Some(report) => Json(report).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No report available yet" })),
        )
            .into_response(),
    }
}
