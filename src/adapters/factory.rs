//! Adapter factory
//!
//! Factory functions that create the pipeline's collaborators from
//! configuration: the file-backed repository and history sink, and the
//! format registry wired with the default generator per family.

use crate::adapters::download::DiskSink;
use crate::adapters::generators::{DocxGenerator, MarkupGenerator, PdfGenerator};
use crate::adapters::history::{ExportHistorySink, FileHistorySink};
use crate::adapters::repository::{FileMeetingStore, MeetingRepository};
use crate::config::DossierConfig;
use crate::core::registry::FormatRegistry;
use std::sync::Arc;

/// Create the meeting repository configured in `[storage]`
pub fn create_meeting_repository(config: &DossierConfig) -> Arc<dyn MeetingRepository> {
    tracing::debug!(path = %config.storage.meetings_path, "Creating file meeting store");
    Arc::new(FileMeetingStore::new(&config.storage.meetings_path))
}

/// Create the history sink configured in `[storage]`
pub fn create_history_sink(config: &DossierConfig) -> Arc<dyn ExportHistorySink> {
    tracing::debug!(path = %config.storage.history_path, "Creating file history sink");
    Arc::new(FileHistorySink::new(&config.storage.history_path))
}

/// Create the format registry with the default generator per family
///
/// PDF and DOCX delegate to the converter tool configured in `[export]`;
/// the text family shares one native generator instance.
pub fn create_format_registry(config: &DossierConfig) -> Arc<FormatRegistry> {
    let tool = config.export.converter_tool.as_str();
    Arc::new(FormatRegistry::new(
        Arc::new(PdfGenerator::new(tool)),
        Arc::new(DocxGenerator::new(tool)),
        Arc::new(MarkupGenerator::new()),
    ))
}

/// Create the delivery sink writing into the configured output directory
pub fn create_download_sink(config: &DossierConfig) -> DiskSink {
    DiskSink::new(&config.export.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::ExportFormat;

    #[test]
    fn test_registry_covers_all_formats() {
        let registry = create_format_registry(&DossierConfig::default());
        for format in ExportFormat::ALL {
            assert!(registry.generator_for(format).is_some());
        }
    }

    #[test]
    fn test_text_formats_are_always_supported() {
        let registry = create_format_registry(&DossierConfig::default());
        let formats = registry.list_formats();
        assert!(formats[2].supported); // txt
        assert!(formats[3].supported); // md
        assert!(formats[4].supported); // json
    }
}
