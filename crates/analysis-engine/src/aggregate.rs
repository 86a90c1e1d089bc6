//! Clause-to-document risk aggregation
//!
//! Two named policies exist because two different callers need them: batch
//! document reports use count ratios, structured single-document analysis
//! uses the mean of mapped scores. Their verdicts can disagree on the same
//! input, so callers pick one and apply it consistently; the policies are
//! never merged.

use shared_types::{ClauseRiskResult, OverallRisk, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AggregationPolicy {
    /// HIGH if >= 40% of clauses are High (boundary inclusive); MEDIUM if
    /// >= 20% High or >= 35% Medium; else LOW.
    RatioThreshold,
    /// Mean of Low=1/Medium=2/High=3 scores: < 1.7 Low, < 2.3 Medium,
    /// else High.
    #[default]
    MeanScore,
}

/// Document-level verdict plus the normalized score percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSummary {
    pub overall: OverallRisk,
    /// `((mean score - 1) / 2) * 100`, rounded to 1 decimal. 0 when no
    /// clauses were available.
    pub risk_percentage: f64,
}

/// Combine ordered per-clause results into a document verdict.
///
/// Zero clauses yields the flagged `Undetermined` verdict at percentage 0,
/// distinguishable from a genuinely low-risk document.
pub fn aggregate(results: &[ClauseRiskResult], policy: AggregationPolicy) -> RiskSummary {
    if results.is_empty() {
        return RiskSummary {
            overall: OverallRisk::Undetermined,
            risk_percentage: 0.0,
        };
    }

    let total = results.len() as f64;
    let avg_score = results.iter().map(|r| r.risk.score() as f64).sum::<f64>() / total;
    let risk_percentage = round1((avg_score - 1.0) / 2.0 * 100.0);

    let overall = match policy {
        AggregationPolicy::RatioThreshold => {
            let high_ratio = count_level(results, RiskLevel::High) as f64 / total;
            let med_ratio = count_level(results, RiskLevel::Medium) as f64 / total;
            if high_ratio >= 0.4 {
                OverallRisk::High
            } else if high_ratio >= 0.2 || med_ratio >= 0.35 {
                OverallRisk::Medium
            } else {
                OverallRisk::Low
            }
        }
        AggregationPolicy::MeanScore => {
            if avg_score < 1.7 {
                OverallRisk::Low
            } else if avg_score < 2.3 {
                OverallRisk::Medium
            } else {
                OverallRisk::High
            }
        }
    };

    RiskSummary {
        overall,
        risk_percentage,
    }
}

fn count_level(results: &[ClauseRiskResult], level: RiskLevel) -> usize {
    results.iter().filter(|r| r.risk == level).count()
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn results(levels: &[RiskLevel]) -> Vec<ClauseRiskResult> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &risk)| ClauseRiskResult {
                clause_no: i + 1,
                clause_text: format!("clause {}", i + 1),
                risk,
                confidence: 90.0,
            })
            .collect()
    }

    #[test]
    fn test_ratio_high_boundary_is_inclusive() {
        use RiskLevel::*;
        // Exactly 2 of 5 High: high_ratio == 0.4
        let summary = aggregate(&results(&[High, High, Low, Low, Low]), AggregationPolicy::RatioThreshold);
        assert_eq!(summary.overall, OverallRisk::High);
    }

    #[test]
    fn test_ratio_just_below_high_boundary() {
        // 39999 of 100000 High: high_ratio == 0.39999, still over the
        // 0.2 Medium threshold
        let mut levels = vec![RiskLevel::High; 39_999];
        levels.resize(100_000, RiskLevel::Low);
        let summary = aggregate(&results(&levels), AggregationPolicy::RatioThreshold);
        assert_eq!(summary.overall, OverallRisk::Medium);
    }

    #[test]
    fn test_ratio_medium_from_medium_share() {
        use RiskLevel::*;
        // 0 High, 2 of 5 Medium = 0.4 >= 0.35
        let summary = aggregate(&results(&[Medium, Medium, Low, Low, Low]), AggregationPolicy::RatioThreshold);
        assert_eq!(summary.overall, OverallRisk::Medium);
    }

    #[test]
    fn test_ratio_low() {
        use RiskLevel::*;
        let summary = aggregate(&results(&[Low, Low, Low, Low, Medium]), AggregationPolicy::RatioThreshold);
        assert_eq!(summary.overall, OverallRisk::Low);
    }

    #[test]
    fn test_mean_score_boundaries() {
        use RiskLevel::*;
        // avg 1.0
        assert_eq!(
            aggregate(&results(&[Low, Low, Low]), AggregationPolicy::MeanScore).overall,
            OverallRisk::Low
        );
        // avg 2.0
        assert_eq!(
            aggregate(&results(&[Low, Medium, High]), AggregationPolicy::MeanScore).overall,
            OverallRisk::Medium
        );
        // avg 7/3 = 2.333 >= 2.3
        assert_eq!(
            aggregate(&results(&[High, High, Low]), AggregationPolicy::MeanScore).overall,
            OverallRisk::High
        );
    }

    #[test]
    fn test_percentage_is_normalized_mean() {
        use RiskLevel::*;
        // avg 2.0 -> 50%
        let summary = aggregate(&results(&[Low, Medium, High]), AggregationPolicy::MeanScore);
        assert_eq!(summary.risk_percentage, 50.0);
        // avg 7/3 -> 66.7%
        let summary = aggregate(&results(&[High, Low, High]), AggregationPolicy::MeanScore);
        assert_eq!(summary.risk_percentage, 66.7);
        // All High -> 100%
        let summary = aggregate(&results(&[High, High]), AggregationPolicy::MeanScore);
        assert_eq!(summary.risk_percentage, 100.0);
    }

    #[test]
    fn test_policies_can_disagree() {
        use RiskLevel::*;
        // 1 of 4 High: ratio says Medium (0.25 >= 0.2), mean says Low (1.5)
        let levels = [High, Low, Low, Low];
        let ratio = aggregate(&results(&levels), AggregationPolicy::RatioThreshold);
        let mean = aggregate(&results(&levels), AggregationPolicy::MeanScore);
        assert_eq!(ratio.overall, OverallRisk::Medium);
        assert_eq!(mean.overall, OverallRisk::Low);
    }

    #[test]
    fn test_zero_clauses_is_undetermined() {
        for policy in [AggregationPolicy::RatioThreshold, AggregationPolicy::MeanScore] {
            let summary = aggregate(&[], policy);
            assert_eq!(summary.overall, OverallRisk::Undetermined);
            assert_eq!(summary.risk_percentage, 0.0);
        }
    }
}
