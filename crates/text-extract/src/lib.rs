//! Text extraction for uploaded contracts
//!
//! Turns raw PDF or DOCX bytes into plain text for the risk engine. The
//! format is chosen from the file extension; documents that yield almost
//! no text are rejected so the engine never scores an empty shell.
//!
//! # Example
//! ```no_run
//! use text_extract::{extract_text, DocumentFormat, ExtractError};
//!
//! fn read_upload(name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
//!     let format = DocumentFormat::from_filename(name)?;
//!     extract_text(bytes, format)
//! }
//! ```

pub mod docx;
pub mod error;
pub mod pdf;

use std::fmt;

pub use error::ExtractError;

/// Fewest non-blank characters accepted from a document
pub const MIN_TEXT_CHARS: usize = 50;

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Detect the format from a filename, ignoring case
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(ExtractError::UnsupportedFormat(filename.to_string()))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract plain text from document bytes
///
/// # Errors
/// - `ExtractError::Pdf` / `ExtractError::Docx` - the file could not be parsed
/// - `ExtractError::InsufficientText` - fewer than [`MIN_TEXT_CHARS`]
///   characters remain after trimming
pub fn extract_text(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes)?,
        DocumentFormat::Docx => docx::extract_docx_text(bytes)?,
    };

    ensure_sufficient_text(&text)?;

    tracing::debug!(
        format = %format,
        bytes = bytes.len(),
        chars = text.chars().count(),
        "extracted document text"
    );

    Ok(text)
}

/// Reject text with fewer than [`MIN_TEXT_CHARS`] characters once trimmed
pub fn ensure_sufficient_text(text: &str) -> Result<(), ExtractError> {
    let found = text.trim().chars().count();
    if found < MIN_TEXT_CHARS {
        return Err(ExtractError::InsufficientText { found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(
            DocumentFormat::from_filename("contract.pdf").unwrap(),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("Final Contract.DOCX").unwrap(),
            DocumentFormat::Docx
        );
    }

    #[test]
    fn test_unsupported_formats_rejected() {
        for name in ["contract.doc", "contract.txt", "contract", "pdf", "contract.pdf.zip"] {
            assert!(matches!(
                DocumentFormat::from_filename(name),
                Err(ExtractError::UnsupportedFormat(_))
            ));
        }
    }

    #[test]
    fn test_insufficient_text_rejected() {
        let err = ensure_sufficient_text(&format!("  {}  \n", "x".repeat(49))).unwrap_err();
        assert!(matches!(err, ExtractError::InsufficientText { found: 49 }));
        assert!(ensure_sufficient_text(&"x".repeat(50)).is_ok());
    }

    #[test]
    fn test_corrupt_pdf_fails() {
        let result = extract_text(b"definitely not a pdf", DocumentFormat::Pdf);
        assert!(matches!(result, Err(ExtractError::Pdf(_))));
    }

    #[test]
    fn test_corrupt_docx_fails() {
        let result = extract_text(b"definitely not a zip archive", DocumentFormat::Docx);
        assert!(matches!(result, Err(ExtractError::Docx(_))));
    }
}
