//! Application state for the ClauseLens API

use analysis_engine::{DocumentAnalyzer, PipelineConfig, RiskClassifier};
use model_client::HttpRiskClassifier;
use std::sync::Arc;

pub struct AppState {
    pub analyzer: DocumentAnalyzer,
}

impl AppState {
    /// Build state around an injected classification capability.
    pub fn new(classifier: Arc<dyn RiskClassifier>, config: PipelineConfig) -> Self {
        Self {
            analyzer: DocumentAnalyzer::new(classifier, config),
        }
    }

    /// Production wiring: HTTP classifier pointed at the model service.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var("MODEL_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        tracing::info!("Using model service at {}", base_url);

        let classifier = Arc::new(HttpRiskClassifier::new(&base_url)?);
        Ok(Self::new(classifier, PipelineConfig::default()))
    }
}
