//! Text-family generator (txt / md / json)
//!
//! One generator serves all three text formats, re-labelled internally as
//! plain-text, markdown, and structured-data mode. The markdown renderer is
//! also the staging input for the PDF and DOCX converter generators.

use crate::adapters::generators::document_filename;
use crate::adapters::generators::traits::{FormatGenerator, GenerationOutput};
use crate::domain::meeting::Meeting;
use crate::domain::options::{ExportFormat, ExportOptions};
use crate::domain::{DossierError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::time::Instant;

/// Generator for the text family of formats
#[derive(Debug, Default, Clone)]
pub struct MarkupGenerator;

impl MarkupGenerator {
    /// Create a new text-family generator
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FormatGenerator for MarkupGenerator {
    fn probe(&self) -> bool {
        // Text assembly needs nothing from the environment.
        true
    }

    async fn generate(
        &self,
        meeting: &Meeting,
        options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        let started = Instant::now();

        let content = match options.format {
            ExportFormat::Txt => render_plain(meeting, options),
            ExportFormat::Md => render_markdown(meeting, options),
            ExportFormat::Json => render_json(meeting, options)?,
            other => {
                return Err(DossierError::UnsupportedFormat(other.as_str().to_string()));
            }
        };

        let filename = document_filename(meeting, options.format.as_str());
        tracing::debug!(
            meeting_id = %meeting.id,
            format = %options.format,
            bytes = content.len(),
            "Assembled text-family document"
        );

        Ok(GenerationOutput::Text {
            content,
            filename,
            processing_time: started.elapsed(),
        })
    }
}

fn header_lines(meeting: &Meeting, options: &ExportOptions) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(branding) = &options.branding {
        if let Some(company) = &branding.company_name {
            lines.push(company.clone());
        }
    }
    if options.include_metadata {
        lines.push(format!("Date: {}", meeting.occurred_at.format("%Y-%m-%d %H:%M UTC")));
        if let Some(minutes) = meeting.duration_minutes {
            lines.push(format!("Duration: {minutes} minutes"));
        }
        if !meeting.participants.is_empty() {
            lines.push(format!("Participants: {}", meeting.participants.join(", ")));
        }
    }
    lines
}

/// Render the meeting as plain text
pub fn render_plain(meeting: &Meeting, options: &ExportOptions) -> String {
    let mut out = String::new();
    out.push_str(&meeting.title);
    out.push('\n');
    out.push_str(&"=".repeat(meeting.title.chars().count()));
    out.push('\n');

    for line in header_lines(meeting, options) {
        out.push_str(&line);
        out.push('\n');
    }

    if options.include_summary {
        if let Some(summary) = &meeting.summary {
            out.push_str("\nSummary\n-------\n");
            out.push_str(summary);
            out.push('\n');
        }
    }

    if options.include_key_points && !meeting.key_points.is_empty() {
        out.push_str("\nKey Points\n----------\n");
        for point in &meeting.key_points {
            out.push_str(&format!("* {point}\n"));
        }
    }

    if options.include_action_items && !meeting.action_items.is_empty() {
        out.push_str("\nAction Items\n------------\n");
        for item in &meeting.action_items {
            let mut line = format!("* {}", item.description);
            if let Some(owner) = &item.owner {
                line.push_str(&format!(" ({owner})"));
            }
            if let Some(due) = &item.due {
                line.push_str(&format!(" due {due}"));
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    if options.include_transcript && !meeting.transcript.is_empty() {
        out.push_str("\nTranscript\n----------\n");
        for segment in &meeting.transcript {
            match &segment.timestamp {
                Some(ts) => out.push_str(&format!("[{ts}] {}: {}\n", segment.speaker, segment.text)),
                None => out.push_str(&format!("{}: {}\n", segment.speaker, segment.text)),
            }
        }
    }

    out
}

/// Render the meeting as Markdown
pub fn render_markdown(meeting: &Meeting, options: &ExportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", meeting.title));

    let header = header_lines(meeting, options);
    if !header.is_empty() {
        out.push('\n');
        for line in header {
            out.push_str(&format!("> {line}\n"));
        }
    }

    if options.include_summary {
        if let Some(summary) = &meeting.summary {
            out.push_str("\n## Summary\n\n");
            out.push_str(summary);
            out.push('\n');
        }
    }

    if options.include_key_points && !meeting.key_points.is_empty() {
        out.push_str("\n## Key Points\n\n");
        for point in &meeting.key_points {
            out.push_str(&format!("- {point}\n"));
        }
    }

    if options.include_action_items && !meeting.action_items.is_empty() {
        out.push_str("\n## Action Items\n\n");
        for item in &meeting.action_items {
            let mut line = format!("- [ ] {}", item.description);
            if let Some(owner) = &item.owner {
                line.push_str(&format!(" (**{owner}**)"));
            }
            if let Some(due) = &item.due {
                line.push_str(&format!(" (due {due})"));
            }
            out.push_str(&line);
            out.push('\n');
        }
    }

    if options.include_transcript && !meeting.transcript.is_empty() {
        out.push_str("\n## Transcript\n\n");
        for segment in &meeting.transcript {
            match &segment.timestamp {
                Some(ts) => out.push_str(&format!(
                    "**{}** `{}`: {}\n\n",
                    segment.speaker, ts, segment.text
                )),
                None => out.push_str(&format!("**{}**: {}\n\n", segment.speaker, segment.text)),
            }
        }
    }

    out
}

/// Render the meeting as structured JSON
///
/// # Errors
///
/// Returns a serialization error if the document cannot be encoded.
pub fn render_json(meeting: &Meeting, options: &ExportOptions) -> Result<String> {
    let mut doc = json!({
        "id": meeting.id.as_str(),
        "title": meeting.title,
    });
    let obj = doc.as_object_mut().expect("document root is an object");

    if options.include_metadata {
        obj.insert(
            "metadata".to_string(),
            json!({
                "occurred_at": meeting.occurred_at.to_rfc3339(),
                "duration_minutes": meeting.duration_minutes,
                "participants": meeting.participants,
            }),
        );
    }
    if options.include_summary {
        if let Some(summary) = &meeting.summary {
            obj.insert("summary".to_string(), json!(summary));
        }
    }
    if options.include_key_points {
        obj.insert("key_points".to_string(), json!(meeting.key_points));
    }
    if options.include_action_items {
        obj.insert("action_items".to_string(), json!(meeting.action_items));
    }
    if options.include_transcript {
        obj.insert("transcript".to_string(), json!(meeting.transcript));
    }
    if let Some(branding) = &options.branding {
        if let Some(company) = &branding.company_name {
            obj.insert("company".to_string(), json!(company));
        }
    }

    Ok(serde_json::to_string_pretty(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meeting::{ActionItem, MeetingBuilder, TranscriptSegment};
    use chrono::{TimeZone, Utc};

    fn sample_meeting() -> Meeting {
        MeetingBuilder::new()
            .id("m-1")
            .unwrap()
            .title("Quarterly Planning")
            .occurred_at(Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap())
            .duration_minutes(45)
            .participant("Ada")
            .participant("Grace")
            .segment(TranscriptSegment::new("Ada", "Welcome everyone."))
            .segment(TranscriptSegment::new("Grace", "Let's look at the roadmap."))
            .summary("We agreed on the Q4 roadmap.")
            .key_point("Ship the importer")
            .action_item(ActionItem::new("Write the migration guide").with_owner("Ada"))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_plain_text_contains_selected_sections() {
        let meeting = sample_meeting();
        let options = ExportOptions::new(ExportFormat::Txt);
        let output = MarkupGenerator::new()
            .generate(&meeting, &options)
            .await
            .unwrap();

        let GenerationOutput::Text { content, filename, .. } = output else {
            panic!("text generator must return text output");
        };
        assert!(content.contains("Quarterly Planning"));
        assert!(content.contains("Summary"));
        assert!(content.contains("We agreed on the Q4 roadmap."));
        assert!(content.contains("Ada: Welcome everyone."));
        assert!(filename.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_disabled_sections_are_omitted() {
        let meeting = sample_meeting();
        let options = ExportOptions::new(ExportFormat::Txt)
            .with_transcript(false)
            .with_key_points(false);
        let output = MarkupGenerator::new()
            .generate(&meeting, &options)
            .await
            .unwrap();

        let GenerationOutput::Text { content, .. } = output else {
            panic!("text generator must return text output");
        };
        assert!(!content.contains("Transcript"));
        assert!(!content.contains("Ship the importer"));
        assert!(content.contains("We agreed on the Q4 roadmap."));
    }

    #[tokio::test]
    async fn test_markdown_uses_headings() {
        let meeting = sample_meeting();
        let options = ExportOptions::new(ExportFormat::Md);
        let output = MarkupGenerator::new()
            .generate(&meeting, &options)
            .await
            .unwrap();

        let GenerationOutput::Text { content, .. } = output else {
            panic!("text generator must return text output");
        };
        assert!(content.starts_with("# Quarterly Planning"));
        assert!(content.contains("## Summary"));
        assert!(content.contains("- [ ] Write the migration guide"));
    }

    #[tokio::test]
    async fn test_json_mode_parses_and_respects_toggles() {
        let meeting = sample_meeting();
        let options = ExportOptions::new(ExportFormat::Json).with_transcript(false);
        let output = MarkupGenerator::new()
            .generate(&meeting, &options)
            .await
            .unwrap();

        let GenerationOutput::Text { content, .. } = output else {
            panic!("text generator must return text output");
        };
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["title"], "Quarterly Planning");
        assert!(value.get("transcript").is_none());
        assert_eq!(value["metadata"]["participants"][0], "Ada");
    }

    #[tokio::test]
    async fn test_branding_company_appears_in_header() {
        let meeting = sample_meeting();
        let options = ExportOptions::new(ExportFormat::Txt).with_branding(
            crate::domain::options::BrandingOptions {
                company_name: Some("Initech".to_string()),
                ..Default::default()
            },
        );
        let output = MarkupGenerator::new()
            .generate(&meeting, &options)
            .await
            .unwrap();

        let GenerationOutput::Text { content, .. } = output else {
            panic!("text generator must return text output");
        };
        assert!(content.contains("Initech"));
    }

    #[test]
    fn test_probe_is_always_true() {
        assert!(MarkupGenerator::new().probe());
    }
}
