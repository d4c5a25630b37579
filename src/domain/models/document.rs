//! Document domain model.
//!
//! A document is the extracted text of a financial report on disk. It is
//! created once by the loader and never modified afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Warning attached to a text file whose content is blank.
pub const EMPTY_DOCUMENT_WARNING: &str = "empty document";

/// Warning attached to a PDF where no page yielded text.
pub const EMPTY_PDF_WARNING: &str = "no text could be extracted from PDF";

/// Format detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Text,
    Pdf,
    Unsupported,
}

impl DocumentFormat {
    /// Classify a path by its extension, case-insensitively.
    pub fn detect(path: &Path) -> Self {
        match extension_of(path).as_str() {
            "txt" => Self::Text,
            "pdf" => Self::Pdf,
            _ => Self::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Pdf => "pdf",
            Self::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-cased extension of `path`, or an empty string when there is none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Extracted text of a document plus any soft-failure warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub path: PathBuf,
    pub detected_format: DocumentFormat,
    pub raw_text: String,
    pub extraction_warnings: Vec<String>,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, detected_format: DocumentFormat, raw_text: String) -> Self {
        Self {
            path: path.into(),
            detected_format,
            raw_text,
            extraction_warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.extraction_warnings.push(warning.into());
        self
    }

    /// Whether downstream stages should treat their output as low confidence.
    pub fn is_low_confidence(&self) -> bool {
        !self.extraction_warnings.is_empty()
    }

    /// Number of characters of extracted text.
    pub fn char_count(&self) -> usize {
        self.raw_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_case_insensitive() {
        assert_eq!(DocumentFormat::detect(Path::new("q2.TXT")), DocumentFormat::Text);
        assert_eq!(DocumentFormat::detect(Path::new("q2.Pdf")), DocumentFormat::Pdf);
        assert_eq!(
            DocumentFormat::detect(Path::new("q2.docx")),
            DocumentFormat::Unsupported
        );
        assert_eq!(
            DocumentFormat::detect(Path::new("README")),
            DocumentFormat::Unsupported
        );
    }

    #[test]
    fn test_warning_marks_low_confidence() {
        let doc = Document::new("a.txt", DocumentFormat::Text, "  ".to_string());
        assert!(!doc.is_low_confidence());

        let doc = doc.with_warning(EMPTY_DOCUMENT_WARNING);
        assert!(doc.is_low_confidence());
        assert_eq!(doc.extraction_warnings, vec!["empty document".to_string()]);
    }
}
