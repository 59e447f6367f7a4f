//! Export formats and request options
//!
//! [`ExportFormat`] is the closed enumeration of supported output formats.
//! [`ExportOptions`] is the immutable per-call request: which format, which
//! meeting sections, and optional branding.

use crate::domain::errors::DossierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats
///
/// Closed enumeration; the format registry is authoritative for per-format
/// metadata (MIME type, descriptor, capability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word-processing document
    Docx,
    /// Plain text
    Txt,
    /// Markdown
    Md,
    /// Structured JSON
    Json,
}

impl ExportFormat {
    /// All formats in registry order
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Pdf,
        ExportFormat::Docx,
        ExportFormat::Txt,
        ExportFormat::Md,
        ExportFormat::Json,
    ];

    /// Lowercase label, which doubles as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Txt => "txt",
            ExportFormat::Md => "md",
            ExportFormat::Json => "json",
        }
    }

    /// Declared MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Txt => "text/plain",
            ExportFormat::Md => "text/markdown",
            ExportFormat::Json => "application/json",
        }
    }

    /// Whether this format belongs to the text family (txt/md/json)
    ///
    /// Text-family output is produced by a single generator and word-counted
    /// by the coordinator.
    pub fn is_text_family(&self) -> bool {
        matches!(
            self,
            ExportFormat::Txt | ExportFormat::Md | ExportFormat::Json
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DossierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "txt" => Ok(ExportFormat::Txt),
            "md" | "markdown" => Ok(ExportFormat::Md),
            "json" => Ok(ExportFormat::Json),
            other => Err(DossierError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Optional document branding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BrandingOptions {
    /// Logo reference (path or URL); interpreted by the generator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Company name rendered in the document header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    /// Accent color as an RGB triple
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<[u8; 3]>,
}

/// Per-call export request
///
/// Constructed by the caller (CLI or a catalog template) and treated as
/// immutable input by the pipeline. All section toggles are independent;
/// no combination is invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Target format
    pub format: ExportFormat,

    /// Include the full transcript
    pub include_transcript: bool,

    /// Include the summary section
    pub include_summary: bool,

    /// Include key discussion points
    pub include_key_points: bool,

    /// Include action items
    pub include_action_items: bool,

    /// Include meeting metadata (date, duration, participants)
    pub include_metadata: bool,

    /// Catalog template this request was derived from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Optional branding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding: Option<BrandingOptions>,
}

impl ExportOptions {
    /// Create options for a format with every section included
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            include_transcript: true,
            include_summary: true,
            include_key_points: true,
            include_action_items: true,
            include_metadata: true,
            template: None,
            branding: None,
        }
    }

    /// Switch the target format, keeping all other fields
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Toggle the transcript section
    pub fn with_transcript(mut self, include: bool) -> Self {
        self.include_transcript = include;
        self
    }

    /// Toggle the summary section
    pub fn with_summary(mut self, include: bool) -> Self {
        self.include_summary = include;
        self
    }

    /// Toggle key points
    pub fn with_key_points(mut self, include: bool) -> Self {
        self.include_key_points = include;
        self
    }

    /// Toggle action items
    pub fn with_action_items(mut self, include: bool) -> Self {
        self.include_action_items = include;
        self
    }

    /// Toggle metadata
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Tag the options with the template they came from
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Attach branding
    pub fn with_branding(mut self, branding: BrandingOptions) -> Self {
        self.branding = Some(branding);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("pdf", ExportFormat::Pdf)]
    #[test_case("docx", ExportFormat::Docx)]
    #[test_case("txt", ExportFormat::Txt)]
    #[test_case("md", ExportFormat::Md)]
    #[test_case("markdown", ExportFormat::Md)]
    #[test_case("json", ExportFormat::Json)]
    #[test_case("PDF", ExportFormat::Pdf ; "uppercase pdf")]
    fn test_format_from_str(label: &str, expected: ExportFormat) {
        assert_eq!(label.parse::<ExportFormat>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_format_is_unsupported() {
        let err = "csv".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, DossierError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("csv"));
    }

    #[test]
    fn test_format_label_round_trip() {
        for format in ExportFormat::ALL {
            assert_eq!(format.as_str().parse::<ExportFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_text_family_membership() {
        assert!(ExportFormat::Txt.is_text_family());
        assert!(ExportFormat::Md.is_text_family());
        assert!(ExportFormat::Json.is_text_family());
        assert!(!ExportFormat::Pdf.is_text_family());
        assert!(!ExportFormat::Docx.is_text_family());
    }

    #[test]
    fn test_options_default_to_all_sections() {
        let options = ExportOptions::new(ExportFormat::Pdf);
        assert!(options.include_transcript);
        assert!(options.include_summary);
        assert!(options.include_key_points);
        assert!(options.include_action_items);
        assert!(options.include_metadata);
        assert!(options.template.is_none());
    }

    #[test]
    fn test_options_builder_toggles() {
        let options = ExportOptions::new(ExportFormat::Md)
            .with_transcript(false)
            .with_template("meeting_minutes");
        assert!(!options.include_transcript);
        assert!(options.include_summary);
        assert_eq!(options.template.as_deref(), Some("meeting_minutes"));
    }

    #[test]
    fn test_format_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&ExportFormat::Docx).unwrap();
        assert_eq!(json, "\"docx\"");
        let back: ExportFormat = serde_json::from_str("\"md\"").unwrap();
        assert_eq!(back, ExportFormat::Md);
    }
}
