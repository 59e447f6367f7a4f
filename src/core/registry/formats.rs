//! Format registry
//!
//! Authoritative table of the five export formats. The registry holds one
//! generator instance per format and answers capability queries by probing
//! that instance; the MIME table is exposed as a pure total function for
//! boundary callers that only hold a string label.

use crate::adapters::generators::FormatGenerator;
use crate::domain::options::ExportFormat;
use std::str::FromStr;
use std::sync::Arc;

/// Fallback MIME type for labels outside the enumeration
pub const OCTET_STREAM: &str = "application/octet-stream";

/// One row of the format table
#[derive(Debug, Clone)]
pub struct FormatDescriptor {
    /// The format
    pub format: ExportFormat,

    /// Human-readable name
    pub name: &'static str,

    /// One-line description
    pub description: &'static str,

    /// Declared MIME type
    pub mime_type: &'static str,

    /// Whether the format's generator is currently usable
    pub supported: bool,
}

fn display_name(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Pdf => "PDF Document",
        ExportFormat::Docx => "Word Document",
        ExportFormat::Txt => "Plain Text",
        ExportFormat::Md => "Markdown",
        ExportFormat::Json => "JSON Data",
    }
}

fn description(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Pdf => "Print-ready document with page metadata",
        ExportFormat::Docx => "Editable Office Open XML document",
        ExportFormat::Txt => "Unformatted plain text",
        ExportFormat::Md => "Markdown source",
        ExportFormat::Json => "Structured meeting data",
    }
}

/// MIME type for a format label
///
/// Pure and total: the five known labels map to the fixed table, anything
/// else falls back to [`OCTET_STREAM`]. Unreachable through the typed API
/// (use [`ExportFormat::mime_type`] there) but kept for robustness against
/// malformed input at the boundary.
pub fn mime_type_for(label: &str) -> &'static str {
    match ExportFormat::from_str(label) {
        Ok(format) => format.mime_type(),
        Err(_) => OCTET_STREAM,
    }
}

/// The format table with its generator instances
///
/// Dispatch is closed polymorphism: each format maps to one
/// [`FormatGenerator`], and the three text-family formats share a single
/// instance.
pub struct FormatRegistry {
    entries: Vec<(ExportFormat, Arc<dyn FormatGenerator>)>,
}

impl FormatRegistry {
    /// Build the registry from one generator per family
    ///
    /// The table order is fixed: pdf, docx, txt, md, json.
    pub fn new(
        pdf: Arc<dyn FormatGenerator>,
        docx: Arc<dyn FormatGenerator>,
        text: Arc<dyn FormatGenerator>,
    ) -> Self {
        Self {
            entries: vec![
                (ExportFormat::Pdf, pdf),
                (ExportFormat::Docx, docx),
                (ExportFormat::Txt, text.clone()),
                (ExportFormat::Md, text.clone()),
                (ExportFormat::Json, text),
            ],
        }
    }

    /// The full format table, in fixed order, with live capability probes
    ///
    /// Probing has no side effects and touches no network.
    pub fn list_formats(&self) -> Vec<FormatDescriptor> {
        self.entries
            .iter()
            .map(|(format, generator)| FormatDescriptor {
                format: *format,
                name: display_name(*format),
                description: description(*format),
                mime_type: format.mime_type(),
                supported: generator.probe(),
            })
            .collect()
    }

    /// The generator registered for a format
    pub fn generator_for(&self, format: ExportFormat) -> Option<Arc<dyn FormatGenerator>> {
        self.entries
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, generator)| generator.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::generators::GenerationOutput;
    use crate::domain::meeting::Meeting;
    use crate::domain::options::ExportOptions;
    use crate::domain::Result;
    use async_trait::async_trait;
    use test_case::test_case;

    struct FixedProbe(bool);

    #[async_trait]
    impl FormatGenerator for FixedProbe {
        fn probe(&self) -> bool {
            self.0
        }

        async fn generate(
            &self,
            _meeting: &Meeting,
            _options: &ExportOptions,
        ) -> Result<GenerationOutput> {
            unreachable!("probe-only stub")
        }
    }

    fn registry(pdf_ok: bool, docx_ok: bool, text_ok: bool) -> FormatRegistry {
        FormatRegistry::new(
            Arc::new(FixedProbe(pdf_ok)),
            Arc::new(FixedProbe(docx_ok)),
            Arc::new(FixedProbe(text_ok)),
        )
    }

    #[test_case("pdf", "application/pdf")]
    #[test_case(
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    )]
    #[test_case("txt", "text/plain")]
    #[test_case("md", "text/markdown")]
    #[test_case("json", "application/json")]
    fn test_mime_table_is_exact(label: &str, expected: &str) {
        assert_eq!(mime_type_for(label), expected);
    }

    #[test_case("csv")]
    #[test_case("")]
    #[test_case("pdf2")]
    #[test_case("application/pdf")]
    fn test_unknown_labels_fall_back_to_octet_stream(label: &str) {
        assert_eq!(mime_type_for(label), OCTET_STREAM);
    }

    #[test]
    fn test_list_formats_order_and_count() {
        let formats = registry(true, true, true).list_formats();
        let order: Vec<ExportFormat> = formats.iter().map(|d| d.format).collect();
        assert_eq!(order, ExportFormat::ALL);
    }

    #[test]
    fn test_supported_reflects_probe_per_family() {
        let formats = registry(false, true, true).list_formats();
        assert!(!formats[0].supported); // pdf
        assert!(formats[1].supported); // docx
        assert!(formats[2].supported); // txt
        assert!(formats[3].supported); // md
        assert!(formats[4].supported); // json
    }

    #[test]
    fn test_text_family_shares_one_instance() {
        let registry = registry(true, true, false);
        let formats = registry.list_formats();
        assert!(!formats[2].supported);
        assert!(!formats[3].supported);
        assert!(!formats[4].supported);
    }

    #[test]
    fn test_generator_lookup() {
        let registry = registry(true, true, true);
        assert!(registry.generator_for(ExportFormat::Md).is_some());
    }
}
