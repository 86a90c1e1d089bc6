pub mod types;

pub use types::{
    ClauseRiskResult, DocumentCategory, DocumentRiskResult, DocumentTypeResult, OverallRisk,
    RiskLevel,
};
