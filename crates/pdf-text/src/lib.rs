//! PDF text extraction boundary
//!
//! Thin wrapper around `pdf-extract` keeping the rest of the system free of
//! PDF concerns. Extraction failures are terminal and not retried.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes are not a readable PDF document.
    #[error("failed to extract text from PDF: {0}")]
    Unreadable(String),
}

/// Extract raw text from an in-memory PDF.
///
/// Whitespace-only output is valid here; deciding whether a document has
/// usable content is the analysis pipeline's concern.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Unreadable(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_unreadable() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Unreadable(_)));
    }

    #[test]
    fn test_empty_bytes_are_unreadable() {
        assert!(extract_text(&[]).is_err());
    }
}
