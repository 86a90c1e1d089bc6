//! Clause segmentation
//!
//! Splits normalized text into clause-sized units with a two-tier strategy:
//! structural boundaries (numbered section markers and, optionally, all-caps
//! headings) first, then a sentence-boundary fallback when the document is
//! not structured enough to produce a useful split.

use lazy_static::lazy_static;
use regex::Regex;

/// Minimum number of non-empty primary segments before the sentence
/// fallback kicks in.
const MIN_PRIMARY_SEGMENTS: usize = 3;

lazy_static! {
    /// Sentence boundary: terminator, whitespace, then an uppercase letter
    /// or opening parenthesis.
    static ref SENTENCE_BOUNDARY: Regex = Regex::new(r"[.;:]\s+[A-Z(]").unwrap();
}

/// Segmentation tuning. The two call-site profiles that historically used
/// divergent splitters are expressed as presets over this one config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// Trimmed segments at or below this length are discarded.
    pub min_clause_length: usize,
    /// Treat all-caps heading runs as structural boundaries.
    pub heading_detection: bool,
}

impl SegmenterConfig {
    /// Full-document pipeline profile.
    pub fn full_document() -> Self {
        Self {
            min_clause_length: 30,
            heading_detection: true,
        }
    }

    /// Ad-hoc document splitting profile (batch reports).
    pub fn ad_hoc() -> Self {
        Self {
            min_clause_length: 20,
            heading_detection: true,
        }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::full_document()
    }
}

/// Deterministic clause splitter. Compiles its boundary pattern once.
pub struct ClauseSegmenter {
    config: SegmenterConfig,
    boundary: Regex,
}

impl ClauseSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        // Numbered section markers: "1.", "2.1)", "3 -" at the start of the
        // text or after whitespace. The trailing punctuation is required so
        // plain counts ("30 days") do not split.
        let numbered = r"(?:^|\s)\d+(?:\.\d+)*\s*[.)-]\s+";
        // Heading: a run of all-caps tokens, at least 4 leading characters.
        let heading = r"(?:^|\s)[A-Z][A-Z0-9\-_/]{3,}(?:\s+[A-Z][A-Z0-9\-_/]{2,})*(?:\s+|$)";

        let pattern = if config.heading_detection {
            format!("{numbered}|{heading}")
        } else {
            numbered.to_string()
        };
        let boundary = Regex::new(&pattern).unwrap();

        Self { config, boundary }
    }

    /// Split text into ordered clauses. Total: empty input yields an empty
    /// vector, and text with no usable boundaries can legally yield zero
    /// clauses (the orchestrator reports that state, it is not a failure).
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut segments = self.split_structural(text);
        if segments.iter().filter(|s| !s.trim().is_empty()).count() < MIN_PRIMARY_SEGMENTS {
            segments = split_sentences(text);
        }

        segments
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| s.len() > self.config.min_clause_length)
            .collect()
    }

    /// Tier 1: split at structural markers, dropping the marker text itself.
    fn split_structural(&self, text: &str) -> Vec<String> {
        let mut parts = Vec::new();
        let mut last = 0;
        for m in self.boundary.find_iter(text) {
            parts.push(text[last..m.start()].to_string());
            last = m.end();
        }
        parts.push(text[last..].to_string());
        parts
    }
}

/// Tier 2: split after `.`/`;`/`:` followed by whitespace and an uppercase
/// letter or `(`. The terminator stays with the preceding segment; the
/// matched letter starts the next one.
fn split_sentences(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // Both the terminator and the trailing matched char are single-byte
        parts.push(text[last..m.start() + 1].to_string());
        last = m.end() - 1;
    }
    parts.push(text[last..].to_string());
    parts
}
