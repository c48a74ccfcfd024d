use crate::models::AppState;
use crate::services::run_analysis;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    // Forwarded to the engine as-is; no validation happens here.
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisFailure {
    pub error: &'static str,
    pub kind: &'static str,
    pub details: String,
    pub timestamp: String,
}

pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!("[{}] starting analysis for {}", request_id, request.url);

    match run_analysis(&request.url, &state.browser, &state.engine).await {
        Ok(report) => {
            info!("[{}] analysis completed with score {}", request_id, report.score);
            state.store.put(report.clone());
            Json(report).into_response()
        }
        Err(err) => {
            error!("[{}] analysis failed: {}", request_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AnalysisFailure {
                    error: "Analysis failed",
                    kind: err.kind(),
                    details: err.to_string(),
                    timestamp: Utc::now().to_rfc3339(),
                }),
            )
                .into_response()
        }
    }
}
