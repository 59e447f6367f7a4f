//! DOCX generator
//!
//! Renders the meeting as markdown and delegates byte rendering to the
//! external converter. DOCX output carries no page or word metadata.

use crate::adapters::generators::pandoc::{convert_markdown, tool_available};
use crate::adapters::generators::traits::{FormatGenerator, GenerationOutput};
use crate::adapters::generators::{document_filename, markup};
use crate::domain::meeting::Meeting;
use crate::domain::options::ExportOptions;
use crate::domain::Result;
use async_trait::async_trait;
use std::time::Instant;

/// Generator for DOCX output
#[derive(Debug, Clone)]
pub struct DocxGenerator {
    tool: String,
}

impl DocxGenerator {
    /// Create a DOCX generator using the given converter tool
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }
}

#[async_trait]
impl FormatGenerator for DocxGenerator {
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
        let bytes = convert_markdown(&self.tool, &markdown, "docx").await?;

        tracing::debug!(
            meeting_id = %meeting.id,
            bytes = bytes.len(),
            "Converted meeting to DOCX"
        );

        Ok(GenerationOutput::Binary {
            filename: document_filename(meeting, "docx"),
            bytes,
            processing_time: started.elapsed(),
        })
    }
}
