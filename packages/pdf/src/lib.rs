#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF text extraction for statement uploads.
//!
//! Credit card statements arrive as machine-generated PDFs. This crate
//! extracts their plain text using pure-Rust text extraction
//! ([`pdf_extract`]). Scanned or image-only statements produce little or no
//! text; deciding how much text is enough to be useful is the caller's
//! policy, not this crate's.

/// Errors specific to PDF text extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),
}

/// Extracts plain text from in-memory PDF bytes.
///
/// The extracted text is trimmed. Empty output is not an error here.
///
/// # Errors
///
/// Returns [`PdfError::Extraction`] when the bytes are not a parseable PDF
/// document.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

    log::debug!(
        "Extracted {} characters of text from a {} byte PDF",
        text.len(),
        bytes.len()
    );

    Ok(text.trim().to_owned())
}
