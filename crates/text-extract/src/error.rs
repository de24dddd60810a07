use thiserror::Error;

/// Errors that can occur while reading an uploaded document
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Insufficient text extracted ({found} characters)")]
    InsufficientText { found: usize },

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

impl ExtractError {
    /// True when the caller sent something we can never read
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::UnsupportedFormat(_) | ExtractError::InsufficientText { .. }
        )
    }
}
