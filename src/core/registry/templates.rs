//! Template catalog
//!
//! Named option presets. Templates are read-only configuration: consumers
//! take the preset's options as a starting point and override individual
//! fields (the format in particular defaults to PDF).

use crate::domain::options::{ExportFormat, ExportOptions};

/// A named export preset
#[derive(Debug, Clone)]
pub struct ExportTemplate {
    /// Stable identifier
    pub id: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Pre-filled options
    pub options: ExportOptions,
}

/// The fixed set of presets
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    /// All presets, in catalog order
    pub fn list() -> Vec<ExportTemplate> {
        vec![
            ExportTemplate {
                id: "professional",
                name: "Professional Report",
                description: "Every section plus meeting metadata",
                options: ExportOptions::new(ExportFormat::Pdf).with_template("professional"),
            },
            ExportTemplate {
                id: "meeting_minutes",
                name: "Meeting Minutes",
                description: "Summary, key points and action items, no transcript",
                options: ExportOptions::new(ExportFormat::Pdf)
                    .with_transcript(false)
                    .with_template("meeting_minutes"),
            },
            ExportTemplate {
                id: "transcript_only",
                name: "Transcript Only",
                description: "The raw transcript with meeting metadata",
                options: ExportOptions::new(ExportFormat::Pdf)
                    .with_summary(false)
                    .with_key_points(false)
                    .with_action_items(false)
                    .with_template("transcript_only"),
            },
            ExportTemplate {
                id: "summary_only",
                name: "Summary Only",
                description: "Summary, key points and action items, no transcript",
                options: ExportOptions::new(ExportFormat::Pdf)
                    .with_transcript(false)
                    .with_template("summary_only"),
            },
        ]
    }

    /// Find a preset by id
    pub fn find(id: &str) -> Option<ExportTemplate> {
        Self::list().into_iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_ids() {
        let ids: Vec<&str> = TemplateCatalog::list().iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![
                "professional",
                "meeting_minutes",
                "transcript_only",
                "summary_only"
            ]
        );
    }

    #[test]
    fn test_professional_includes_everything() {
        let template = TemplateCatalog::find("professional").unwrap();
        let o = &template.options;
        assert!(o.include_transcript);
        assert!(o.include_summary);
        assert!(o.include_key_points);
        assert!(o.include_action_items);
        assert!(o.include_metadata);
        assert_eq!(o.template.as_deref(), Some("professional"));
    }

    #[test]
    fn test_meeting_minutes_drops_transcript() {
        let template = TemplateCatalog::find("meeting_minutes").unwrap();
        let o = &template.options;
        assert!(!o.include_transcript);
        assert!(o.include_summary);
        assert!(o.include_key_points);
        assert!(o.include_action_items);
        assert!(o.include_metadata);
    }

    #[test]
    fn test_transcript_only_keeps_transcript_and_metadata() {
        let template = TemplateCatalog::find("transcript_only").unwrap();
        let o = &template.options;
        assert!(o.include_transcript);
        assert!(!o.include_summary);
        assert!(!o.include_key_points);
        assert!(!o.include_action_items);
        assert!(o.include_metadata);
    }

    #[test]
    fn test_summary_only_matches_minutes_toggles() {
        let minutes = TemplateCatalog::find("meeting_minutes").unwrap();
        let summary = TemplateCatalog::find("summary_only").unwrap();
        assert_eq!(
            minutes.options.include_transcript,
            summary.options.include_transcript
        );
        assert_eq!(
            minutes.options.include_summary,
            summary.options.include_summary
        );
        assert_ne!(minutes.id, summary.id);
    }

    #[test]
    fn test_unknown_template_is_none() {
        assert!(TemplateCatalog::find("nope").is_none());
    }

    #[test]
    fn test_options_are_a_starting_point() {
        let template = TemplateCatalog::find("meeting_minutes").unwrap();
        let options = template.options.with_format(ExportFormat::Md);
        assert_eq!(options.format, ExportFormat::Md);
        assert!(!options.include_transcript);
    }
}
