//! Document-reading capability backed by [`DocumentLoader`].

use async_trait::async_trait;

use crate::domain::errors::CapabilityError;
use crate::domain::models::{CapabilityOutput, READ_DOCUMENT};
use crate::domain::ports::Capability;
use crate::infrastructure::document::DocumentLoader;

/// Reads a financial document (PDF or TXT) and returns its text.
///
/// Load errors surface as [`CapabilityError::Load`]; document warnings ride
/// along in [`CapabilityOutput::warnings`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadDocumentCapability {
    loader: DocumentLoader,
}

impl ReadDocumentCapability {
    pub fn new() -> Self {
        Self {
            loader: DocumentLoader::new(),
        }
    }
}

#[async_trait]
impl Capability for ReadDocumentCapability {
    fn name(&self) -> &str {
        READ_DOCUMENT
    }

    fn description(&self) -> &str {
        "Read a financial document (PDF or TXT) and return its text content"
    }

    async fn invoke(&self, input: &str) -> Result<CapabilityOutput, CapabilityError> {
        let document = self.loader.load(input)?;
        Ok(CapabilityOutput::text(document.raw_text).with_warnings(document.extraction_warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LoadError;

    #[tokio::test]
    async fn test_invoke_returns_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q2.txt");
        std::fs::write(&path, "Total revenue grew 12%").unwrap();

        let output = ReadDocumentCapability::new()
            .invoke(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(output.text, "Total revenue grew 12%");
        assert!(output.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_invoke_carries_empty_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.txt");
        std::fs::write(&path, "\n\n").unwrap();

        let output = ReadDocumentCapability::new()
            .invoke(path.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(output.warnings, vec!["empty document".to_string()]);
    }

    #[tokio::test]
    async fn test_invoke_maps_load_error() {
        let err = ReadDocumentCapability::new()
            .invoke("/definitely/not/here.pdf")
            .await
            .unwrap_err();
        assert!(matches!(err, CapabilityError::Load(LoadError::NotFound(_))));
    }
}
