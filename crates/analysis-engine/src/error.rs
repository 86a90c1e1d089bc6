use crate::classify::ClassifierError;
use thiserror::Error;

/// Errors the pipeline surfaces to its caller.
///
/// Zero detected clauses is deliberately not here: it is reported as a
/// complete result carrying an undetermined verdict. Extraction failures
/// belong to the extraction boundary and are mapped by the calling layer.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Normalization left no usable text (distinct from failed extraction).
    #[error("document contains no usable text")]
    EmptyContent,

    /// The external classification capability failed; the whole batch is
    /// abandoned rather than reporting partial risk.
    #[error("clause risk classifier unavailable: {0}")]
    ClassificationUnavailable(#[from] ClassifierError),
}
