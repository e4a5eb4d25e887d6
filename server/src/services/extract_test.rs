use super::*;
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

fn build_docx(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("pack docx");
    cursor.into_inner()
}

fn para(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

// =============================================================================
// FileKind
// =============================================================================

#[test]
fn file_kind_dispatches_on_lowercase_suffix() {
    assert_eq!(FileKind::from_name("notes.TXT"), FileKind::PlainText);
    assert_eq!(FileKind::from_name("README.md"), FileKind::PlainText);
    assert_eq!(FileKind::from_name("data.csv"), FileKind::PlainText);
    assert_eq!(FileKind::from_name("config.Json"), FileKind::Json);
    assert_eq!(FileKind::from_name("letter.docx"), FileKind::Docx);
    assert_eq!(FileKind::from_name("book.xlsx"), FileKind::Spreadsheet);
    assert_eq!(FileKind::from_name("legacy.XLS"), FileKind::Spreadsheet);
    assert_eq!(FileKind::from_name("scan.pdf"), FileKind::Pdf);
    assert_eq!(FileKind::from_name("main.rs"), FileKind::Other);
    assert_eq!(FileKind::from_name("Makefile"), FileKind::Other);
}

// =============================================================================
// plain text + truncation
// =============================================================================

#[test]
fn plain_text_passes_through() {
    let text = extract_file("notes.txt", "héllo\nworld".as_bytes()).unwrap();
    assert_eq!(text, "héllo\nworld");
}

#[test]
fn text_at_cap_is_not_truncated() {
    let body = "a".repeat(MAX_CONTENT_CHARS);
    let text = extract_file("big.txt", body.as_bytes()).unwrap();
    assert_eq!(text, body);
}

#[test]
fn text_over_cap_is_truncated_with_marker() {
    let body = "b".repeat(MAX_CONTENT_CHARS + 10);
    let text = extract_file("big.md", body.as_bytes()).unwrap();
    assert!(text.ends_with(TRUNCATION_MARKER));
    assert_eq!(text.chars().count(), MAX_CONTENT_CHARS + TRUNCATION_MARKER.chars().count());
    assert_eq!(&text[..MAX_CONTENT_CHARS], &body[..MAX_CONTENT_CHARS]);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let body = "é".repeat(MAX_CONTENT_CHARS + 1);
    let text = truncate(body);
    let kept: String = text.chars().take(MAX_CONTENT_CHARS).collect();
    assert_eq!(kept, "é".repeat(MAX_CONTENT_CHARS));
    assert!(text.ends_with(TRUNCATION_MARKER));
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn json_is_reserialized_with_indentation() {
    let text = extract_file("cfg.json", br#"{"name":"docchat","tags":["a","b"],"n":1}"#).unwrap();
    assert!(text.contains("\n  \"name\": \"docchat\""));
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, serde_json::json!({ "name": "docchat", "tags": ["a", "b"], "n": 1 }));
}

#[test]
fn json_preserves_key_order() {
    let text = extract_file("cfg.json", br#"{"z":1,"a":2}"#).unwrap();
    assert!(text.find("\"z\"").unwrap() < text.find("\"a\"").unwrap());
}

#[test]
fn invalid_json_errors() {
    let err = extract_file("broken.json", b"{not json").unwrap_err();
    assert!(matches!(err, ExtractError::InvalidJson(_)));
}

// =============================================================================
// DOCX
// =============================================================================

#[test]
fn docx_paragraphs_become_lines() {
    let bytes = build_docx(Docx::new().add_paragraph(para("Hello")).add_paragraph(para("World")));
    let text = extract_file("letter.docx", &bytes).unwrap();
    assert_eq!(text, "Hello\nWorld\n");
}

#[test]
fn docx_tables_are_tab_separated() {
    let table = Table::new(vec![TableRow::new(vec![
        TableCell::new().add_paragraph(para("name")),
        TableCell::new().add_paragraph(para("qty")),
    ])]);
    let bytes = build_docx(Docx::new().add_paragraph(para("Inventory")).add_table(table));
    let text = extract_file("table.docx", &bytes).unwrap();
    assert!(text.starts_with("Inventory\n"));
    assert!(text.contains("name\tqty\n"));
}

#[test]
fn corrupt_docx_errors() {
    let err = extract_file("broken.docx", b"not a zip").unwrap_err();
    assert!(matches!(err, ExtractError::Docx(_)));
}

// =============================================================================
// spreadsheet / pdf / other
// =============================================================================

fn build_workbook() -> Vec<u8> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    {
        let sheet = workbook.add_worksheet().set_name("Data").expect("name sheet");
        sheet.write_string(0, 0, "name").expect("write");
        sheet.write_string(0, 1, "note").expect("write");
        sheet.write_string(1, 0, "apple").expect("write");
        sheet.write_number(1, 1, 3.0).expect("write");
        sheet.write_string(2, 0, "a,b").expect("write");
    }
    {
        let sheet = workbook.add_worksheet().set_name("Two").expect("name sheet");
        sheet.write_string(0, 0, "x").expect("write");
    }
    workbook.save_to_buffer().expect("save workbook")
}

#[test]
fn workbook_sheets_become_headed_csv_blocks() {
    let text = extract_file("book.xlsx", &build_workbook()).unwrap();
    assert_eq!(text, "\n=== Sheet: Data ===\nname,note\napple,3\n\"a,b\",\n=== Sheet: Two ===\nx");
}

#[test]
fn corrupt_spreadsheet_errors() {
    let err = extract_file("broken.xlsx", b"not a workbook").unwrap_err();
    assert!(matches!(err, ExtractError::Spreadsheet(_)));
}

#[test]
fn csv_field_quotes_only_when_needed() {
    assert_eq!(csv_field("plain"), "plain");
    assert_eq!(csv_field("a,b"), "\"a,b\"");
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
}

#[test]
fn corrupt_pdf_degrades_to_placeholder() {
    let text = extract_file("scan.pdf", b"%PDF-1.4 garbage").unwrap();
    assert_eq!(text, PDF_FAILED_PLACEHOLDER);
}

#[test]
fn unknown_extension_utf8_is_accepted() {
    let text = extract_file("main.rs", b"fn main() {}").unwrap();
    assert_eq!(text, "fn main() {}");
}

#[test]
fn unknown_extension_binary_is_unsupported() {
    let err = extract_file("image.png", &[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, ExtractError::Unsupported));
    assert_eq!(err.to_string(), "Unsupported file type");
}
