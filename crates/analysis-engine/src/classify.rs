//! Clause risk classification boundary
//!
//! The classifier itself is an external capability; this module only
//! defines the trait that capability implements plus the batching adapter
//! that fans clauses out to it.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use shared_types::RiskLevel;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors crossing the classification boundary.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The model service cannot be reached or returned a transport error.
    #[error("classifier unreachable: {0}")]
    Unreachable(String),

    /// A single classification call exceeded the configured timeout.
    #[error("classification timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered with a label or confidence outside the contract.
    #[error("invalid classifier response: {0}")]
    InvalidResponse(String),
}

/// Prediction returned by the external clause-risk classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClausePrediction {
    pub risk: RiskLevel,
    /// Percentage in [0, 100].
    pub confidence: f64,
}

/// The external three-class clause-risk classification capability.
///
/// Implementations are pure boundaries: they translate to and from an
/// underlying model and never score clauses themselves. Constructed once at
/// startup and shared read-only behind an `Arc`.
#[async_trait]
pub trait RiskClassifier: Send + Sync {
    async fn classify(&self, clause: &str) -> Result<ClausePrediction, ClassifierError>;
}

/// Batching front for a [`RiskClassifier`]: bounded concurrency, a per-call
/// timeout, and output order matching input order 1:1.
///
/// Failure policy: one failed or timed-out clause fails the whole batch.
/// Partial results would misstate document risk, and no clause may be
/// silently dropped.
pub struct ClassificationAdapter {
    classifier: Arc<dyn RiskClassifier>,
    concurrency: usize,
    timeout: Duration,
}

impl ClassificationAdapter {
    pub fn new(classifier: Arc<dyn RiskClassifier>, concurrency: usize, timeout: Duration) -> Self {
        Self {
            classifier,
            concurrency: concurrency.max(1),
            timeout,
        }
    }

    /// Classify every clause, preserving input order.
    pub async fn classify_batch(
        &self,
        clauses: &[String],
    ) -> Result<Vec<ClausePrediction>, ClassifierError> {
        let results: Vec<Result<ClausePrediction, ClassifierError>> = stream::iter(clauses.to_vec())
            .map(|clause| {
                let classifier = Arc::clone(&self.classifier);
                let timeout = self.timeout;
                async move {
                    match tokio::time::timeout(timeout, classifier.classify(&clause)).await {
                        Ok(result) => result,
                        Err(_) => Err(ClassifierError::Timeout(timeout)),
                    }
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        results.into_iter().collect()
    }
}
