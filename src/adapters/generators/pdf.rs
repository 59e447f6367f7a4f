//! PDF generator
//!
//! Renders the meeting as markdown and delegates byte rendering to the
//! external converter. PDF is the one format that reports page-count
//! metadata, recovered by scanning the produced bytes for page objects.

use crate::adapters::generators::pandoc::{convert_markdown, tool_available};
use crate::adapters::generators::traits::{FormatGenerator, GenerationOutput};
use crate::adapters::generators::{document_filename, markup};
use crate::domain::meeting::Meeting;
use crate::domain::options::ExportOptions;
use crate::domain::Result;
use async_trait::async_trait;
use std::time::Instant;

/// Generator for PDF output
#[derive(Debug, Clone)]
pub struct PdfGenerator {
    tool: String,
}

impl PdfGenerator {
    /// Create a PDF generator using the given converter tool
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

#[async_trait]
impl FormatGenerator for PdfGenerator {
    fn probe(&self) -> bool {
        tool_available(&self.tool)
    }

    async fn generate(
        &self,
        meeting: &Meeting,
        options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        let started = Instant::now();

        let markdown = markup::render_markdown(meeting, options);
        let bytes = convert_markdown(&self.tool, &markdown, "pdf").await?;
        let page_count = count_pdf_pages(&bytes);

        tracing::debug!(
            meeting_id = %meeting.id,
            bytes = bytes.len(),
            pages = page_count,
            "Converted meeting to PDF"
        );

        Ok(GenerationOutput::Paged {
            filename: document_filename(meeting, "pdf"),
            bytes,
            processing_time: started.elapsed(),
            page_count,
        })
    }
}

/// Count page objects in a PDF byte stream
///
/// Scans for `/Type /Page` dictionary entries, taking care not to count
/// the `/Type /Pages` tree node. Returns at least 1 for non-empty input,
/// since a converter never emits a zero-page document.
pub fn count_pdf_pages(bytes: &[u8]) -> usize {
    const NEEDLE: &[u8] = b"/Type /Page";
    const NEEDLE_COMPACT: &[u8] = b"/Type/Page";

    let mut count = 0;
    for needle in [NEEDLE, NEEDLE_COMPACT] {
        let mut start = 0;
        while let Some(pos) = find(&bytes[start..], needle) {
            let end = start + pos + needle.len();
            // Exclude "/Type /Pages"
            if bytes.get(end) != Some(&b's') {
                count += 1;
            }
            start = end;
        }
    }
    count.max(1)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages_skips_pages_tree_node() {
        let pdf = b"1 0 obj << /Type /Pages /Count 2 >>\n\
                    2 0 obj << /Type /Page /Parent 1 0 R >>\n\
                    3 0 obj << /Type /Page /Parent 1 0 R >>";
        assert_eq!(count_pdf_pages(pdf), 2);
    }

    #[test]
    fn test_count_pages_handles_compact_syntax() {
        let pdf = b"<</Type/Pages/Count 1>> <</Type/Page/Parent 1 0 R>>";
        assert_eq!(count_pdf_pages(pdf), 1);
    }

    #[test]
    fn test_count_pages_is_at_least_one() {
        assert_eq!(count_pdf_pages(b"%PDF-1.7 no page markers here"), 1);
    }

    #[test]
    fn test_probe_reflects_missing_tool() {
        let generator = PdfGenerator::new("definitely-not-a-real-converter-tool");
        assert!(!generator.probe());
    }
}
