//! PDF text extraction via pdf-extract

use std::panic;

use pdf_extract::extract_text_from_mem;

use crate::ExtractError;

/// Extract text from PDF bytes, one line-terminated block per page
///
/// Pages are split on form feeds; pages with no text are dropped.
pub fn extract_pdf_text(pdf_bytes: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of erroring
    let raw_text = panic::catch_unwind(|| extract_text_from_mem(pdf_bytes))
        .map_err(|_| ExtractError::Pdf("parser aborted on malformed content".to_string()))?
        .map_err(|e| {
            let message = e.to_string();
            if message.to_lowercase().contains("encrypted") {
                ExtractError::Pdf(format!("password-protected PDF: {}", message))
            } else {
                ExtractError::Pdf(message)
            }
        })?;

    Ok(join_pages(&raw_text))
}

/// Rebuild page text with a single trailing newline per non-empty page
fn join_pages(raw_text: &str) -> String {
    let mut text = String::with_capacity(raw_text.len());
    for page in raw_text.split('\x0C') {
        if page.trim().is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
    }
    text
}
