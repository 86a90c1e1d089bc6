//! HTTP handlers for the ClauseLens API

use axum::{body::Bytes, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_types::DocumentRiskResult;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub id: String,
    pub analyzed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: DocumentRiskResult,
}

/// Analyze a PDF document supplied as the raw request body.
pub async fn analyze_document(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::InvalidRequest("empty request body".to_string()));
    }

    let text = pdf_text::extract_text(&body)?;
    let result = state.analyzer.analyze(&text).await?;
    Ok(Json(wrap(result)))
}

/// Analyze raw document text supplied as JSON.
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let result = state.analyzer.analyze(&req.text).await?;
    Ok(Json(wrap(result)))
}

fn wrap(result: DocumentRiskResult) -> AnalyzeResponse {
    let id = Uuid::new_v4().to_string();
    tracing::info!("Completed analysis {}", id);
    AnalyzeResponse {
        id,
        analyzed_at: Utc::now(),
        result,
    }
}
