//! File extraction: uploaded bytes to plain text for the prompt.
//!
//! DESIGN
//! ======
//! Dispatch is by lowercase file-name suffix only; the declared content type
//! is reported back but never trusted. Binary formats are handed to their
//! parsing crates (`docx-rs`, `calamine`, `pdf-extract`). PDF failures degrade
//! to a placeholder string; DOCX/spreadsheet failures are hard errors.
//!
//! All functions here are synchronous and CPU-bound. Callers on the async
//! runtime should go through `spawn_blocking`.

use std::io::Cursor;

use calamine::Reader;
use docx_rs::{DocumentChild, TableCellContent, TableChild, TableRowChild};
use serde_json::Value;
use tracing::warn;

/// Maximum number of characters kept from an extracted document.
pub const MAX_CONTENT_CHARS: usize = 50_000;

pub const TRUNCATION_MARKER: &str = "\n\n[... Content truncated due to length ...]";

pub const PDF_FAILED_PLACEHOLDER: &str = "[PDF parsing failed - file may be image-based or corrupted]";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("{0}")]
    InvalidJson(String),
    #[error("failed to read Word document: {0}")]
    Docx(String),
    #[error("failed to read spreadsheet: {0}")]
    Spreadsheet(String),
    #[error("Unsupported file type")]
    Unsupported,
}

/// Extraction strategy selected from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    PlainText,
    Json,
    Docx,
    Spreadsheet,
    Pdf,
    Other,
}

impl FileKind {
    #[must_use]
    pub fn from_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        let ext = lower.rsplit_once('.').map_or("", |(_, ext)| ext);
        match ext {
            "txt" | "md" | "csv" => Self::PlainText,
            "json" => Self::Json,
            "docx" => Self::Docx,
            "xlsx" | "xls" => Self::Spreadsheet,
            "pdf" => Self::Pdf,
            _ => Self::Other,
        }
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Extract and truncate the text of one uploaded file.
///
/// # Errors
///
/// Returns [`ExtractError`] for malformed JSON, unreadable DOCX/spreadsheet
/// files, and non-UTF-8 files with an unrecognized extension.
pub fn extract_file(file_name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let text = match FileKind::from_name(file_name) {
        FileKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
        FileKind::Json => pretty_json(bytes)?,
        FileKind::Docx => docx_text(bytes)?,
        FileKind::Spreadsheet => spreadsheet_text(bytes)?,
        FileKind::Pdf => pdf_text(file_name, bytes),
        FileKind::Other => String::from_utf8(bytes.to_vec()).map_err(|_| ExtractError::Unsupported)?,
    };
    Ok(truncate(text))
}

/// Cut `text` to [`MAX_CONTENT_CHARS`] characters, appending the marker when
/// anything was dropped.
#[must_use]
pub fn truncate(text: String) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => {
            let mut kept = text[..cut].to_owned();
            kept.push_str(TRUNCATION_MARKER);
            kept
        }
        None => text,
    }
}

// =============================================================================
// FORMATS
// =============================================================================

fn pretty_json(bytes: &[u8]) -> Result<String, ExtractError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;
    serde_json::to_string_pretty(&value).map_err(|e| ExtractError::InvalidJson(e.to_string()))
}

#[allow(irrefutable_let_patterns)]
fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;
    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => {
                text.push_str(&p.raw_text());
                text.push('\n');
            }
            DocumentChild::Table(table) => {
                for row in &table.rows {
                    let TableChild::TableRow(row) = row else { continue };
                    let cells: Vec<String> = row
                        .cells
                        .iter()
                        .filter_map(|cell| {
                            let TableRowChild::TableCell(cell) = cell else { return None };
                            let cell_text = cell
                                .children
                                .iter()
                                .filter_map(|content| match content {
                                    TableCellContent::Paragraph(p) => Some(p.raw_text()),
                                    _ => None,
                                })
                                .collect::<Vec<_>>()
                                .join(" ");
                            Some(cell_text)
                        })
                        .collect();
                    text.push_str(&cells.join("\t"));
                    text.push('\n');
                }
            }
            _ => {}
        }
    }
    Ok(text)
}

fn spreadsheet_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
    let mut text = String::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| ExtractError::Spreadsheet(e.to_string()))?;
        text.push_str(&format!("\n=== Sheet: {name} ===\n"));
        let rows: Vec<String> = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| csv_field(&cell.to_string()))
                    .collect::<Vec<_>>()
                    .join(",")
            })
            .collect();
        text.push_str(&rows.join("\n"));
    }
    Ok(text)
}

/// Quote a CSV field when it contains a delimiter, quote, or line break.
pub(crate) fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_owned()
    }
}

fn pdf_text(file_name: &str, bytes: &[u8]) -> String {
    // pdf-extract panics on some malformed inputs; treat that like an error.
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!(%file_name, error = %e, "parse-file: pdf extraction failed");
            PDF_FAILED_PLACEHOLDER.to_owned()
        }
        Err(_) => {
            warn!(%file_name, "parse-file: pdf extraction panicked");
            PDF_FAILED_PLACEHOLDER.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
