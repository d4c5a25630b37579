use std::fs;
use std::path::Path;

use crate::domain::errors::LoadError;
use crate::domain::models::document::extension_of;
use crate::domain::models::{Document, DocumentFormat, EMPTY_DOCUMENT_WARNING, EMPTY_PDF_WARNING};

/// Reads financial reports from disk.
///
/// Loading is a pure function of the filesystem at call time: nothing is
/// cached and the source file is only ever opened for reading.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader;

impl DocumentLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load and extract the text of the document at `path`.
    ///
    /// Missing files are reported before the extension is looked at. Blank
    /// text files and PDFs without extractable text load successfully with
    /// a warning.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Document, LoadError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let document = match DocumentFormat::detect(path) {
            DocumentFormat::Text => load_text(path)?,
            DocumentFormat::Pdf => load_pdf(path)?,
            DocumentFormat::Unsupported => {
                return Err(LoadError::UnsupportedFormat(unsupported_label(path)));
            }
        };

        tracing::debug!(
            path = %path.display(),
            format = %document.detected_format,
            chars = document.char_count(),
            warnings = document.extraction_warnings.len(),
            "document loaded"
        );

        Ok(document)
    }
}

fn unsupported_label(path: &Path) -> String {
    let ext = extension_of(path);
    if ext.is_empty() {
        "(none)".to_string()
    } else {
        format!(".{ext}")
    }
}

fn load_text(path: &Path) -> Result<Document, LoadError> {
    let bytes = fs::read(path)
        .map_err(|e| LoadError::ExtractionFailed(format!("{}: {e}", path.display())))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        LoadError::ExtractionFailed(format!("{} is not valid UTF-8: {e}", path.display()))
    })?;

    let blank = text.trim().is_empty();
    let document = Document::new(path, DocumentFormat::Text, text);
    Ok(if blank {
        document.with_warning(EMPTY_DOCUMENT_WARNING)
    } else {
        document
    })
}

fn load_pdf(path: &Path) -> Result<Document, LoadError> {
    let pdf = lopdf::Document::load(path)
        .map_err(|e| LoadError::ExtractionFailed(format!("error reading PDF: {e}")))?;

    let mut text = String::new();
    for page_number in pdf.get_pages().keys().copied() {
        let page_text = pdf.extract_text(&[page_number]).map_err(|e| {
            LoadError::ExtractionFailed(format!("error reading PDF page {page_number}: {e}"))
        })?;

        if page_text.trim().is_empty() {
            tracing::debug!(page = page_number, "skipping PDF page without text");
            continue;
        }
        text.push_str(&page_marker(page_number));
        text.push_str(&page_text);
    }

    if text.trim().is_empty() {
        return Ok(Document::new(path, DocumentFormat::Pdf, String::new()).with_warning(EMPTY_PDF_WARNING));
    }
    Ok(Document::new(path, DocumentFormat::Pdf, text))
}

/// Separator placed before each page's text.
pub fn page_marker(page_number: u32) -> String {
    format!("\n--- Page {page_number} ---\n")
}
