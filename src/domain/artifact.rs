//! Normalized export results
//!
//! Generators return format-specific shapes; the coordinator projects every
//! variant into the single [`ExportResult`] handed to the caller, who owns
//! it thereafter (delivers it through a sink or discards it).

use crate::domain::ids::ExportToken;
use crate::domain::options::ExportFormat;
use std::time::Duration;

/// Opaque document bytes with their declared MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportContent {
    /// Raw document bytes
    pub bytes: Vec<u8>,

    /// MIME type declared for the bytes
    pub mime_type: String,
}

impl ExportContent {
    /// Wrap bytes with a MIME type
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Byte length of the content
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the content is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Format-dependent result metadata
///
/// `page_count` is set only for PDF output; `word_count` only for the text
/// family (txt/md/json, whitespace-tokenized by the coordinator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultMetadata {
    /// Page count, PDF only
    pub page_count: Option<usize>,

    /// Whitespace-token word count, text family only
    pub word_count: Option<usize>,
}

impl ResultMetadata {
    /// Metadata carrying a page count
    pub fn paged(page_count: usize) -> Self {
        Self {
            page_count: Some(page_count),
            word_count: None,
        }
    }

    /// Metadata carrying a word count
    pub fn worded(word_count: usize) -> Self {
        Self {
            page_count: None,
            word_count: Some(word_count),
        }
    }

    /// True when neither field is set
    pub fn is_empty(&self) -> bool {
        self.page_count.is_none() && self.word_count.is_none()
    }
}

/// The normalized outcome of one export call
#[derive(Debug, Clone, PartialEq)]
pub struct ExportResult {
    /// Document content with declared MIME type
    pub content: ExportContent,

    /// Suggested filename, extension included
    pub filename: String,

    /// Content size in bytes
    pub size: u64,

    /// Format the export was produced in
    pub format: ExportFormat,

    /// Wall-clock time the generator spent
    pub processing_time: Duration,

    /// Correlation token of the call that produced this result
    pub token: ExportToken,

    /// Format-dependent metadata, when any applies
    pub metadata: Option<ResultMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_length() {
        let content = ExportContent::new(b"hello".to_vec(), "text/plain");
        assert_eq!(content.len(), 5);
        assert!(!content.is_empty());
    }

    #[test]
    fn test_metadata_constructors() {
        let paged = ResultMetadata::paged(3);
        assert_eq!(paged.page_count, Some(3));
        assert_eq!(paged.word_count, None);

        let worded = ResultMetadata::worded(120);
        assert_eq!(worded.page_count, None);
        assert_eq!(worded.word_count, Some(120));

        assert!(ResultMetadata::default().is_empty());
    }
}
