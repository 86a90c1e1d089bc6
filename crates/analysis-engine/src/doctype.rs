//! Document type detection by weighted keyword scoring

use crate::keywords::CATEGORY_KEYWORDS;
use shared_types::{DocumentCategory, DocumentTypeResult};

/// Categories scoring below this share of all keyword hits fall back to the
/// general/unknown bucket.
const MIN_CONFIDENCE_PCT: f64 = 10.0;

/// Classify a normalized document into a category.
///
/// Score per category = sum of case-insensitive occurrence counts of its
/// keywords. The highest score wins; ties resolve to the first-declared
/// category in [`CATEGORY_KEYWORDS`]. Confidence is the winning score's
/// share of all scores, as a percentage rounded to 1 decimal. Always returns
/// a result; empty text yields the general category at confidence 0.
pub fn detect(text: &str) -> DocumentTypeResult {
    let text_lower = text.to_lowercase();

    let scores: Vec<(DocumentCategory, usize)> = CATEGORY_KEYWORDS
        .iter()
        .map(|(category, words)| {
            let score = words.iter().map(|w| text_lower.matches(w).count()).sum();
            (*category, score)
        })
        .collect();

    let total: usize = scores.iter().map(|(_, s)| s).sum();

    // Strict comparison keeps the first-declared category on ties
    let mut best = scores[0];
    for candidate in &scores[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }

    let confidence = best.1 as f64 / (total as f64 + 1e-6) * 100.0;
    if confidence < MIN_CONFIDENCE_PCT {
        return DocumentTypeResult {
            category: DocumentCategory::General,
            confidence: 0.0,
        };
    }

    DocumentTypeResult {
        category: best.0,
        confidence: round1(confidence),
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lease_keywords_dominate() {
        let text = "tenant landlord rent ".repeat(5);
        let result = detect(&text);
        assert_eq!(result.category, DocumentCategory::Lease);
        assert!(result.confidence > 90.0, "confidence {}", result.confidence);
    }

    #[test]
    fn test_empty_text_is_general() {
        let result = detect("");
        assert_eq!(result.category, DocumentCategory::General);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_no_keyword_hits_is_general() {
        let result = detect("lorem ipsum dolor sit amet with nothing contractual about it");
        assert_eq!(result.category, DocumentCategory::General);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_tie_resolves_to_first_declared() {
        // NDA and Employment both score 2; NDA is declared first
        let result = detect("recipient employee recipient employee");
        assert_eq!(result.category, DocumentCategory::Nda);
        assert_eq!(result.confidence, 50.0);
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        let result = detect("EMPLOYEE Employer SALARY benefits Termination");
        assert_eq!(result.category, DocumentCategory::Employment);
    }

    #[test]
    fn test_weak_signal_falls_back_to_general() {
        // One lease hit among many service hits still picks Service, but a
        // lone hit below the 10% share threshold does not
        let text = format!("{} lease", "service deliverables client ".repeat(4));
        let result = detect(&text);
        assert_eq!(result.category, DocumentCategory::Service);

        // 1 lease hit out of 12 service hits: the winner is Service, not
        // the weak category
        assert!(result.confidence > MIN_CONFIDENCE_PCT);
    }
}
