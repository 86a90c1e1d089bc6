//! HTTP client for the external clause-risk model service
//!
//! Implements the [`RiskClassifier`] capability over the model service's
//! JSON contract: `POST /classify` with `{"text": ...}`, answered by
//! `{"label": "Low"|"Medium"|"High", "confidence": 0..100}`.

use analysis_engine::{ClausePrediction, ClassifierError, RiskClassifier};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared_types::RiskLevel;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: String,
    confidence: f64,
}

/// reqwest-backed classifier client. Construct once at startup and share
/// behind an `Arc`; the underlying connection pool is reused across calls.
pub struct HttpRiskClassifier {
    client: reqwest::Client,
    classify_url: String,
}

impl HttpRiskClassifier {
    pub fn new(base_url: &str) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ClassifierError::Unreachable(e.to_string()))?;
        Ok(Self {
            client,
            classify_url: classify_url(base_url),
        })
    }
}

fn classify_url(base_url: &str) -> String {
    format!("{}/classify", base_url.trim_end_matches('/'))
}

#[async_trait]
impl RiskClassifier for HttpRiskClassifier {
    async fn classify(&self, clause: &str) -> Result<ClausePrediction, ClassifierError> {
        let response = self
            .client
            .post(&self.classify_url)
            .json(&ClassifyRequest { text: clause })
            .send()
            .await
            .map_err(|e| ClassifierError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClassifierError::Unreachable(format!(
                "model service returned {}",
                response.status()
            )));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;

        let risk: RiskLevel = body
            .label
            .parse()
            .map_err(ClassifierError::InvalidResponse)?;
        if !(0.0..=100.0).contains(&body.confidence) {
            return Err(ClassifierError::InvalidResponse(format!(
                "confidence out of range: {}",
                body.confidence
            )));
        }

        tracing::trace!(risk = %risk, confidence = body.confidence, "classified clause");
        Ok(ClausePrediction {
            risk,
            confidence: body.confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_url_joining() {
        assert_eq!(classify_url("http://localhost:5000"), "http://localhost:5000/classify");
        assert_eq!(classify_url("http://localhost:5000/"), "http://localhost:5000/classify");
    }

    #[test]
    fn test_response_contract_deserializes() {
        let body: ClassifyResponse =
            serde_json::from_str(r#"{"label": "High", "confidence": 92.4}"#).unwrap();
        assert_eq!(body.label, "High");
        assert_eq!(body.confidence, 92.4);
        assert_eq!(body.label.parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("Critical".parse::<RiskLevel>().is_err());
    }
}
