//! PDF text extraction using pdf-extract
//!
//! Produces the document as ordered paragraph segments. Structure is not
//! validated; whatever text the library recovers is passed on.

use std::path::Path;

use tracing::info;

use crate::errors::SimplifyError;

/// Turns a staged document on disk into ordered text segments.
pub trait TextExtractor: Send + Sync {
    /// # Errors
    ///
    /// Returns an extraction error if the file cannot be read as a PDF.
    fn extract(&self, path: &Path) -> Result<Vec<String>, SimplifyError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>, SimplifyError> {
        let text = pdf_extract::extract_text(path).map_err(|e| {
            SimplifyError::ExtractionError(format!("{}: {}", path.display(), e))
        })?;

        let segments = split_segments(&text);
        info!(
            segments = segments.len(),
            chars = text.chars().count(),
            "Extracted PDF text"
        );
        Ok(segments)
    }
}

/// Splits raw extracted text into trimmed, non-empty paragraphs.
#[must_use]
pub fn split_segments(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\u{000C}', "\n\n");

    let mut segments = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    for line in normalized.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !paragraph.is_empty() {
                segments.push(paragraph.join("\n"));
                paragraph.clear();
            }
        } else {
            paragraph.push(line);
        }
    }
    if !paragraph.is_empty() {
        segments.push(paragraph.join("\n"));
    }

    segments
}

/// Joins extracted segments into the document text fed to the summarizer.
#[must_use]
pub fn join_segments(segments: &[String]) -> String {
    segments.join("\n")
}
