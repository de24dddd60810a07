//! DOCX text extraction
//!
//! Reads `word/document.xml` out of the package and keeps the text of the
//! body's top-level paragraphs, one per line. Paragraphs nested in tables,
//! content controls or text boxes are skipped, and so are runs wrapped in
//! tracked changes, smart tags or simple fields.

use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use zip::ZipArchive;

use crate::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

lazy_static! {
    /// Any XML tag, capturing closing slash, name and self-closing slash
    static ref TAG_PATTERN: Regex =
        Regex::new(r"<(/?)([A-Za-z_][\w:.-]*)[^>]*?(/?)>").unwrap();

    /// Character and predefined entity references
    static ref ENTITY_PATTERN: Regex =
        Regex::new(r"&(#x[0-9A-Fa-f]+|#[0-9]+|amp|lt|gt|quot|apos);").unwrap();
}

/// Extract paragraph text from DOCX bytes
pub fn extract_docx_text(docx_bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(docx_bytes))
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    Ok(paragraphs_from_xml(&xml).join("\n"))
}

/// Walk document XML and collect top-level paragraph texts in order
///
/// Only `w:p` elements that are direct children of `w:body` count, and
/// within them only runs that sit directly in the paragraph or in a
/// hyperlink. Tables, content controls, text boxes and revision marks such
/// as `w:ins` are left out.
fn paragraphs_from_xml(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    // Names of the currently open elements, outermost first
    let mut open: Vec<&str> = Vec::new();
    let mut in_text = false;
    let mut cursor = 0;

    for caps in TAG_PATTERN.captures_iter(xml) {
        let (Some(tag), Some(name)) = (caps.get(0), caps.get(2)) else {
            continue;
        };

        if in_text {
            current.push_str(&decode_entities(&xml[cursor..tag.start()]));
        }
        cursor = tag.end();

        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();
        let name = name.as_str();

        if closing {
            if name == "w:p" && open.ends_with(&["w:body", "w:p"]) {
                paragraphs.push(std::mem::take(&mut current));
            }
            if name == "w:t" {
                in_text = false;
            }
            if let Some(pos) = open.iter().rposition(|n| *n == name) {
                open.truncate(pos);
            }
            continue;
        }

        match name {
            "w:p" if open.ends_with(&["w:body"]) => {
                current.clear();
                if self_closing {
                    paragraphs.push(String::new());
                }
            }
            "w:t" => in_text = !self_closing && in_body_run(&open),
            "w:tab" if in_body_run(&open) => current.push('\t'),
            "w:br" | "w:cr" if in_body_run(&open) => current.push('\n'),
            _ => {}
        }

        if !self_closing {
            open.push(name);
        }
    }

    paragraphs
}

/// True when the innermost open element is a run of a top-level paragraph
fn in_body_run(open: &[&str]) -> bool {
    open.ends_with(&["w:body", "w:p", "w:r"])
        || open.ends_with(&["w:body", "w:p", "w:hyperlink", "w:r"])
}

/// Decode the XML entities that appear in run text
fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            match entity {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                _ => {
                    let code = if let Some(hex) = entity.strip_prefix("#x") {
                        u32::from_str_radix(hex, 16).ok()
                    } else {
                        entity[1..].parse::<u32>().ok()
                    };
                    code.and_then(char::from_u32)
                        .map(String::from)
                        .unwrap_or_else(|| caps[0].to_string())
                }
            }
        })
        .into_owned()
}
