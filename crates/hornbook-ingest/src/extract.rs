//! Text extraction from uploaded files

use crate::error::{IngestError, IngestResult};
use hornbook_core::FileKind;
use std::fs;
use std::path::Path;

/// Pulls raw text out of an uploaded worksheet
///
/// The pipeline holds this behind `Arc<dyn TextExtractor>` so an
/// OCR-capable extractor can slot in without touching the pipeline.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, path: &Path) -> IngestResult<String>;
}

/// Extractor for plain-text and markdown worksheets
///
/// PDF, image and docx files are recognized but not extracted here; they
/// surface as [`IngestError::UnsupportedKind`], which the pipeline downgrades
/// to a warning and empty text.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> IngestResult<String> {
        if !path.exists() {
            return Err(IngestError::FileNotFound(path.to_path_buf()));
        }

        let kind = FileKind::from_path(path);
        if !kind.is_extractable() {
            return Err(IngestError::UnsupportedKind(kind));
        }

        fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::write;
    use tempfile::TempDir;

    #[test]
    fn test_extracts_text_and_markdown() {
        let tmp = TempDir::new().unwrap();
        let txt = tmp.path().join("sheet.txt");
        let md = tmp.path().join("sheet.md");
        write(&txt, "2 + 2 =").unwrap();
        write(&md, "# Worksheet\n\n3 + 4 =").unwrap();

        let extractor = PlainTextExtractor::new();
        assert_eq!(extractor.extract(&txt).unwrap(), "2 + 2 =");
        assert!(extractor.extract(&md).unwrap().contains("3 + 4 ="));
    }

    #[test]
    fn test_unsupported_kind() {
        let tmp = TempDir::new().unwrap();
        let pdf = tmp.path().join("scan.pdf");
        write(&pdf, b"%PDF-1.4").unwrap();

        let extractor = PlainTextExtractor::new();
        let result = extractor.extract(&pdf);
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedKind(FileKind::Pdf))
        ));
    }

    #[test]
    fn test_missing_file() {
        let extractor = PlainTextExtractor::new();
        let result = extractor.extract(Path::new("/nonexistent/sheet.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound(_))));
    }
}
