//! Error types for the ClauseLens API

use analysis_engine::AnalysisError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pdf_text::ExtractError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Extraction(e) => {
                tracing::warn!("Extraction failed: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            ApiError::Analysis(AnalysisError::EmptyContent) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "document contains no usable text".to_string(),
            ),
            ApiError::Analysis(AnalysisError::ClassificationUnavailable(e)) => {
                tracing::error!("Classifier unavailable: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "risk classification service unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
