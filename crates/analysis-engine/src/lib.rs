//! Analysis Engine - Core contract risk analysis pipeline
//!
//! This crate provides:
//! - Text normalization for raw extracted document text
//! - Keyword-based document type detection
//! - Two-tier clause segmentation with fallback
//! - The risk classifier capability boundary and batching adapter
//! - Clause-to-document risk aggregation (two named policies)
//! - The pipeline orchestrator assembling the final result

pub mod aggregate;
pub mod classify;
pub mod doctype;
pub mod error;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod segment;

// Re-export commonly used types
pub use aggregate::{AggregationPolicy, RiskSummary};
pub use classify::{ClassificationAdapter, ClausePrediction, ClassifierError, RiskClassifier};
pub use error::AnalysisError;
pub use pipeline::{DocumentAnalyzer, PipelineConfig};
pub use segment::{ClauseSegmenter, SegmenterConfig};
