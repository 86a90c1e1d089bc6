//! ClauseLens API Server - contract risk analysis over HTTP
//!
//! Provides REST endpoints for:
//! - Analyzing an uploaded PDF contract
//! - Analyzing raw contract text

use anyhow::Result;
use clauselens_api::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clauselens_api=info".parse()?)
                .add_directive("analysis_engine=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing ClauseLens API...");
    let state = Arc::new(AppState::from_env()?);
    let app = clauselens_api::router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting ClauseLens API on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
