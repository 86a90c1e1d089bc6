//! ClauseLens API - HTTP surface for the contract risk analysis pipeline

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/analyze", post(handlers::analyze_document))
        .route("/api/analyze/text", post(handlers::analyze_text))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
