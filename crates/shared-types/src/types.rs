use serde::{Deserialize, Serialize};

/// Per-clause risk label assigned by the external classifier.
///
/// Ordered so that `Low < Medium < High`; `score()` gives the 1..=3 mapping
/// used by mean-score aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn score(self) -> u32 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk label: {other}")),
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document-level verdict.
///
/// `Undetermined` is the flagged zero-clause outcome: segmentation found no
/// risk-assessable clauses, so no verdict could be computed. It is distinct
/// from a genuine `Low` verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallRisk {
    Low,
    Medium,
    High,
    Undetermined,
}

/// Coarse document category inferred from keyword density.
///
/// Declaration order is the deterministic tie-break order for detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentCategory {
    #[serde(rename = "Non-Disclosure Agreement (NDA)")]
    Nda,
    #[serde(rename = "Employment Agreement")]
    Employment,
    #[serde(rename = "Lease Agreement")]
    Lease,
    #[serde(rename = "Consulting Agreement")]
    Consulting,
    #[serde(rename = "Service Agreement")]
    Service,
    #[serde(rename = "License Agreement")]
    License,
    #[serde(rename = "General Contract / Unknown Type")]
    General,
}

impl DocumentCategory {
    pub fn label(self) -> &'static str {
        match self {
            DocumentCategory::Nda => "Non-Disclosure Agreement (NDA)",
            DocumentCategory::Employment => "Employment Agreement",
            DocumentCategory::Lease => "Lease Agreement",
            DocumentCategory::Consulting => "Consulting Agreement",
            DocumentCategory::Service => "Service Agreement",
            DocumentCategory::License => "License Agreement",
            DocumentCategory::General => "General Contract / Unknown Type",
        }
    }
}

impl std::fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of document-type detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DocumentTypeResult {
    pub category: DocumentCategory,
    /// Percentage in [0, 100], rounded to 1 decimal. 0 when no category's
    /// keyword score crossed the minimum threshold.
    pub confidence: f64,
}

/// Risk prediction for a single clause. Field names follow the report wire
/// contract consumed by downstream clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseRiskResult {
    /// 1-based position of the clause in the document.
    #[serde(rename = "Clause_No")]
    pub clause_no: usize,
    /// Clause text, truncated for display (500 chars + "...").
    #[serde(rename = "Clause_Text")]
    pub clause_text: String,
    #[serde(rename = "Predicted_Risk")]
    pub risk: RiskLevel,
    /// Percentage in [0, 100].
    #[serde(rename = "Confidence")]
    pub confidence: f64,
}

/// Terminal output of one analysis: document type, overall verdict, and the
/// ordered per-clause results. Flat and JSON-serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRiskResult {
    pub document_type: DocumentCategory,
    pub document_type_confidence: f64,
    pub overall_risk: OverallRisk,
    pub risk_percentage: f64,
    pub clauses: Vec<ClauseRiskResult>,
}

impl DocumentRiskResult {
    /// True when segmentation found no clauses and the verdict is the
    /// flagged `Undetermined` state rather than a computed one.
    pub fn no_clauses_detected(&self) -> bool {
        self.clauses.is_empty() && self.overall_risk == OverallRisk::Undetermined
    }
}
