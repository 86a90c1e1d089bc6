//! Pipeline orchestration
//!
//! Sequences normalization, type detection, segmentation, classification,
//! and aggregation, and assembles the terminal result. This is the only
//! place aware of the full output contract: callers get either a complete
//! `DocumentRiskResult` or a complete error, never a partial result.

use crate::aggregate::{self, AggregationPolicy};
use crate::classify::{ClassificationAdapter, RiskClassifier};
use crate::doctype;
use crate::error::AnalysisError;
use crate::normalize::normalize;
use crate::segment::{ClauseSegmenter, SegmenterConfig};
use shared_types::{ClauseRiskResult, DocumentRiskResult, OverallRisk};
use std::sync::Arc;
use std::time::Duration;

/// Clause text longer than this is truncated for display in results.
const CLAUSE_TEXT_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub segmenter: SegmenterConfig,
    pub policy: AggregationPolicy,
    /// Maximum in-flight classification calls.
    pub concurrency: usize,
    /// Per-clause classification timeout; expiry is treated the same as a
    /// classifier failure.
    pub classify_timeout: Duration,
}

impl Default for PipelineConfig {
    /// Full-document structured analysis tuning.
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::full_document(),
            policy: AggregationPolicy::MeanScore,
            concurrency: 4,
            classify_timeout: Duration::from_secs(30),
        }
    }
}

impl PipelineConfig {
    /// Batch document report tuning: shorter minimum clause length and the
    /// ratio-threshold verdict.
    pub fn document_report() -> Self {
        Self {
            segmenter: SegmenterConfig::ad_hoc(),
            policy: AggregationPolicy::RatioThreshold,
            ..Self::default()
        }
    }
}

/// The document analysis pipeline. Holds the injected classification
/// capability; carries no state across invocations.
pub struct DocumentAnalyzer {
    segmenter: ClauseSegmenter,
    adapter: ClassificationAdapter,
    policy: AggregationPolicy,
}

impl DocumentAnalyzer {
    pub fn new(classifier: Arc<dyn RiskClassifier>, config: PipelineConfig) -> Self {
        Self {
            segmenter: ClauseSegmenter::new(config.segmenter),
            adapter: ClassificationAdapter::new(
                classifier,
                config.concurrency,
                config.classify_timeout,
            ),
            policy: config.policy,
        }
    }

    /// Analyze raw extracted text end to end.
    pub async fn analyze(&self, raw: &str) -> Result<DocumentRiskResult, AnalysisError> {
        let text = normalize(raw);
        if text.is_empty() {
            return Err(AnalysisError::EmptyContent);
        }

        let doc_type = doctype::detect(&text);
        let clauses = self.segmenter.segment(&text);
        tracing::debug!(
            category = %doc_type.category,
            clause_count = clauses.len(),
            "segmented document"
        );

        if clauses.is_empty() {
            tracing::warn!("no clauses detected; reporting undetermined verdict");
            return Ok(DocumentRiskResult {
                document_type: doc_type.category,
                document_type_confidence: doc_type.confidence,
                overall_risk: OverallRisk::Undetermined,
                risk_percentage: 0.0,
                clauses: Vec::new(),
            });
        }

        let predictions = self.adapter.classify_batch(&clauses).await?;

        let clause_results: Vec<ClauseRiskResult> = clauses
            .iter()
            .zip(predictions)
            .enumerate()
            .map(|(i, (clause, prediction))| ClauseRiskResult {
                clause_no: i + 1,
                clause_text: truncate_for_display(clause),
                risk: prediction.risk,
                confidence: prediction.confidence,
            })
            .collect();

        let summary = aggregate::aggregate(&clause_results, self.policy);
        tracing::info!(
            overall = ?summary.overall,
            risk_percentage = summary.risk_percentage,
            "analysis complete"
        );

        Ok(DocumentRiskResult {
            document_type: doc_type.category,
            document_type_confidence: doc_type.confidence,
            overall_risk: summary.overall,
            risk_percentage: summary.risk_percentage,
            clauses: clause_results,
        })
    }
}

fn truncate_for_display(clause: &str) -> String {
    // Normalized text is ASCII, so char and byte counts agree
    if clause.len() > CLAUSE_TEXT_LIMIT {
        format!("{}...", &clause[..CLAUSE_TEXT_LIMIT])
    } else {
        clause.to_string()
    }
}
