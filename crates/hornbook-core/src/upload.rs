//! Uploaded worksheet records
//!
//! One audit row per file fed to the ingestion pipeline, linking the file to
//! the lesson it produced (if any).

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File kind, detected from the extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Text,
    Markdown,
    Pdf,
    Image,
    Docx,
    #[default]
    Unknown,
}

impl FileKind {
    /// Sniff the kind from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("txt") => FileKind::Text,
            Some("md") | Some("markdown") => FileKind::Markdown,
            Some("pdf") => FileKind::Pdf,
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("webp") => {
                FileKind::Image
            }
            Some("docx") | Some("doc") => FileKind::Docx,
            _ => FileKind::Unknown,
        }
    }

    /// Whether the pipeline can pull text out of this kind directly
    pub fn is_extractable(&self) -> bool {
        matches!(self, FileKind::Text | FileKind::Markdown)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Text => "text",
            FileKind::Markdown => "markdown",
            FileKind::Pdf => "pdf",
            FileKind::Image => "image",
            FileKind::Docx => "docx",
            FileKind::Unknown => "unknown",
        }
    }

    /// Parse a stored kind string, falling back to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s {
            "text" => FileKind::Text,
            "markdown" => FileKind::Markdown,
            "pdf" => FileKind::Pdf,
            "image" => FileKind::Image,
            "docx" => FileKind::Docx,
            _ => FileKind::Unknown,
        }
    }
}

/// Audit record for an ingested worksheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub filename: String,
    pub kind: FileKind,
    /// Lesson the ingestion produced; `None` when nothing usable was found
    pub lesson_id: Option<i64>,
    pub problems_created: i64,
    pub uploaded_at: DateTime<Utc>,
}

/// Insert parameters for an uploaded-file record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUploadedFile {
    pub filename: String,
    pub kind: FileKind,
    pub lesson_id: Option<i64>,
    pub problems_created: i64,
}

impl NewUploadedFile {
    pub fn new(filename: impl Into<String>, kind: FileKind) -> Self {
        Self {
            filename: filename.into(),
            kind,
            lesson_id: None,
            problems_created: 0,
        }
    }

    #[must_use]
    pub fn with_lesson_id(mut self, lesson_id: i64) -> Self {
        self.lesson_id = Some(lesson_id);
        self
    }

    #[must_use]
    pub fn with_problems_created(mut self, count: i64) -> Self {
        self.problems_created = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_path() {
        assert_eq!(FileKind::from_path(Path::new("sheet.txt")), FileKind::Text);
        assert_eq!(FileKind::from_path(Path::new("notes.md")), FileKind::Markdown);
        assert_eq!(FileKind::from_path(Path::new("SCAN.PDF")), FileKind::Pdf);
        assert_eq!(FileKind::from_path(Path::new("photo.JPeG")), FileKind::Image);
        assert_eq!(FileKind::from_path(Path::new("report.docx")), FileKind::Docx);
        assert_eq!(FileKind::from_path(Path::new("no_extension")), FileKind::Unknown);
        assert_eq!(FileKind::from_path(Path::new("archive.zip")), FileKind::Unknown);
    }

    #[test]
    fn test_file_kind_extractable() {
        assert!(FileKind::Text.is_extractable());
        assert!(FileKind::Markdown.is_extractable());
        assert!(!FileKind::Pdf.is_extractable());
        assert!(!FileKind::Unknown.is_extractable());
    }

    #[test]
    fn test_file_kind_round_trip() {
        for kind in [
            FileKind::Text,
            FileKind::Markdown,
            FileKind::Pdf,
            FileKind::Image,
            FileKind::Docx,
            FileKind::Unknown,
        ] {
            assert_eq!(FileKind::parse(kind.as_str()), kind);
        }
        assert_eq!(FileKind::parse("spreadsheet"), FileKind::Unknown);
    }

    #[test]
    fn test_new_uploaded_file_builders() {
        let record = NewUploadedFile::new("fractions.txt", FileKind::Text)
            .with_lesson_id(9)
            .with_problems_created(10);
        assert_eq!(record.filename, "fractions.txt");
        assert_eq!(record.lesson_id, Some(9));
        assert_eq!(record.problems_created, 10);
    }
}
