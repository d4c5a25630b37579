//! Document loading against files on disk, including generated PDFs.

mod common;

use finsight::domain::models::{DocumentFormat, EMPTY_PDF_WARNING};
use finsight::infrastructure::document::DocumentLoader;
use finsight::LoadError;

#[test]
fn test_pdf_pages_are_marked_in_order() {
    let dir = common::temp_dir();
    let path = dir.path().join("quarterly.pdf");
    common::write_pdf(&path, &[Some("Revenue grew"), Some("Margins held")]);

    let doc = DocumentLoader::new().load(&path).unwrap();
    assert_eq!(doc.detected_format, DocumentFormat::Pdf);
    assert!(doc.extraction_warnings.is_empty());

    let first = doc.raw_text.find("--- Page 1 ---").unwrap();
    let revenue = doc.raw_text.find("Revenue grew").unwrap();
    let second = doc.raw_text.find("--- Page 2 ---").unwrap();
    let margins = doc.raw_text.find("Margins held").unwrap();
    assert!(first < revenue && revenue < second && second < margins);
}

#[test]
fn test_blank_pdf_pages_are_skipped() {
    let dir = common::temp_dir();
    let path = dir.path().join("cover.PDF");
    common::write_pdf(&path, &[None, Some("Cash flow positive")]);

    let doc = DocumentLoader::new().load(&path).unwrap();
    assert!(!doc.raw_text.contains("--- Page 1 ---"));
    assert!(doc.raw_text.contains("--- Page 2 ---"));
    assert!(doc.raw_text.contains("Cash flow positive"));
}

#[test]
fn test_pdf_without_text_warns() {
    let dir = common::temp_dir();
    let path = dir.path().join("scanned.pdf");
    common::write_pdf(&path, &[None, None]);

    let doc = DocumentLoader::new().load(&path).unwrap();
    assert!(doc.raw_text.is_empty());
    assert_eq!(doc.extraction_warnings, vec![EMPTY_PDF_WARNING.to_string()]);
    assert!(doc.is_low_confidence());
}

#[test]
fn test_text_file_is_not_modified() {
    let dir = common::temp_dir();
    let contents = "Total assets: $122.1B\nTotal liabilities: $48.4B\n";
    let path = common::write_report(&dir, "balance.txt", contents);
    let before = std::fs::metadata(&path).unwrap().modified().unwrap();

    let doc = DocumentLoader::new().load(&path).unwrap();
    assert_eq!(doc.raw_text, contents);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), contents);
    assert_eq!(std::fs::metadata(&path).unwrap().modified().unwrap(), before);
}

#[test]
fn test_missing_pdf_is_not_found() {
    let dir = common::temp_dir();
    let err = DocumentLoader::new().load(dir.path().join("absent.pdf")).unwrap_err();
    assert!(matches!(err, LoadError::NotFound(_)));
}
