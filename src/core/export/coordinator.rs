//! Export coordinator - main orchestrator for the export process
//!
//! This module coordinates the entire export workflow: request validation,
//! meeting resolution, generator dispatch, progress supervision, result
//! normalization, and the best-effort history log. Batch sequencing lives
//! in [`super::batch`].

use crate::adapters::download::DownloadSink;
use crate::adapters::generators::GenerationOutput;
use crate::adapters::history::{ExportHistorySink, ExportRecord};
use crate::adapters::repository::MeetingRepository;
use crate::core::progress::ProgressBus;
use crate::core::registry::FormatRegistry;
use crate::domain::artifact::{ExportContent, ExportResult, ResultMetadata};
use crate::domain::ids::{ExportToken, MeetingId};
use crate::domain::options::{ExportFormat, ExportOptions};
use crate::domain::progress::{ExportProgress, ExportStage};
use crate::domain::{DossierError, Result};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Content-independent export time estimate for a format label
///
/// Unknown labels get the generic default.
fn estimated_duration(format: &str) -> Duration {
    let millis = match format {
        "pdf" => 2000,
        "docx" => 1500,
        "txt" => 500,
        "md" => 500,
        "json" => 300,
        _ => 1000,
    };
    Duration::from_millis(millis)
}

/// Export coordinator
///
/// One instance serves any number of sequential or interleaved export
/// calls; per-call state (token, timing) is local to each call. The only
/// shared mutable state is the progress bus's subscriber set.
pub struct ExportCoordinator {
    repository: Arc<dyn MeetingRepository>,
    registry: Arc<FormatRegistry>,
    history: Arc<dyn ExportHistorySink>,
    bus: ProgressBus,
}

impl ExportCoordinator {
    /// Create a coordinator from its collaborators
    pub fn new(
        repository: Arc<dyn MeetingRepository>,
        registry: Arc<FormatRegistry>,
        history: Arc<dyn ExportHistorySink>,
        bus: ProgressBus,
    ) -> Self {
        Self {
            repository,
            registry,
            history,
            bus,
        }
    }

    /// Create a coordinator with the default file-backed adapters
    ///
    /// Wires the configured meeting store, history sink, and format
    /// registry to a fresh progress bus.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &crate::config::DossierConfig) -> Result<Self> {
        config
            .validate()
            .map_err(DossierError::Configuration)?;

        Ok(Self::new(
            crate::adapters::factory::create_meeting_repository(config),
            crate::adapters::factory::create_format_registry(config),
            crate::adapters::factory::create_history_sink(config),
            ProgressBus::new(),
        ))
    }

    /// The progress bus this coordinator publishes on
    pub fn bus(&self) -> &ProgressBus {
        &self.bus
    }

    /// The format registry backing dispatch
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Export one meeting
    ///
    /// Walks the full stage sequence preparing(10) → generating(30) →
    /// finalizing(90) → complete(100), publishing each stage on the bus
    /// under a token minted for this call. Any failure is wrapped as
    /// `Export failed: <cause>` with the cause's text preserved.
    ///
    /// # Errors
    ///
    /// Fails when the meeting id does not resolve, the format has no
    /// registered generator, or the generator itself errors. No terminal
    /// progress event is published on failure.
    pub async fn export_meeting(
        &self,
        meeting_id: &MeetingId,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        let token = ExportToken::new();
        self.run_export(token, meeting_id, options)
            .await
            .map_err(|e| match e {
                wrapped @ DossierError::ExportFailed(_) => wrapped,
                cause => DossierError::ExportFailed(cause.to_string()),
            })
    }

    async fn run_export(
        &self,
        token: ExportToken,
        meeting_id: &MeetingId,
        options: &ExportOptions,
    ) -> Result<ExportResult> {
        tracing::info!(
            meeting_id = %meeting_id,
            format = %options.format,
            token = %token,
            "Starting export"
        );

        self.bus.publish(
            &ExportProgress::new(token, ExportStage::Preparing, 10, "Preparing export...")
                .with_estimate(estimated_duration(options.format.as_str())),
        );

        let meeting = self
            .repository
            .get_by_id(meeting_id)
            .await?
            .ok_or_else(|| DossierError::MeetingNotFound(meeting_id.to_string()))?;

        self.bus.publish(&ExportProgress::new(
            token,
            ExportStage::Generating,
            30,
            format!(
                "Generating {} document...",
                options.format.as_str().to_uppercase()
            ),
        ));

        let generator = self
            .registry
            .generator_for(options.format)
            .ok_or_else(|| DossierError::UnsupportedFormat(options.format.as_str().to_string()))?;
        let output = generator.generate(&meeting, options).await?;

        self.bus.publish(&ExportProgress::new(
            token,
            ExportStage::Finalizing,
            90,
            "Finalizing export...",
        ));

        let result = normalize(token, options.format, output);

        // The export has already succeeded; a failing history sink must
        // not change the outcome.
        let record = ExportRecord {
            meeting_id: meeting_id.clone(),
            filename: result.filename.clone(),
            size: result.size,
            format: result.format,
            exported_at: Utc::now(),
        };
        if let Err(e) = self.history.record(&record).await {
            tracing::warn!(
                meeting_id = %meeting_id,
                error = %e,
                "Failed to record export history"
            );
        }

        self.bus.publish(&ExportProgress::new(
            token,
            ExportStage::Complete,
            100,
            "Export complete",
        ));

        tracing::info!(
            meeting_id = %meeting_id,
            filename = %result.filename,
            bytes = result.size,
            duration_ms = result.processing_time.as_millis(),
            "Export completed"
        );

        Ok(result)
    }

    /// Deliver a finished export through a sink
    ///
    /// A thin, explicitly side-effecting bridge: no format logic, one
    /// delivery per call.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot write the bytes.
    pub async fn download_export(
        &self,
        sink: &dyn DownloadSink,
        result: &ExportResult,
    ) -> Result<PathBuf> {
        sink.deliver(result).await
    }

    /// Estimate how long exporting a meeting to a format will take
    ///
    /// Pure, content-independent lookup; the meeting id is accepted for
    /// interface stability but does not influence the estimate.
    pub fn estimate_export_time(&self, _meeting_id: &MeetingId, format: &str) -> Duration {
        estimated_duration(format)
    }
}

/// Project a format-specific generator output into the common result shape
fn normalize(token: ExportToken, format: ExportFormat, output: GenerationOutput) -> ExportResult {
    match output {
        GenerationOutput::Paged {
            bytes,
            filename,
            processing_time,
            page_count,
        } => ExportResult {
            size: bytes.len() as u64,
            content: ExportContent::new(bytes, format.mime_type()),
            filename,
            format,
            processing_time,
            token,
            metadata: Some(ResultMetadata::paged(page_count)),
        },
        GenerationOutput::Binary {
            bytes,
            filename,
            processing_time,
        } => ExportResult {
            size: bytes.len() as u64,
            content: ExportContent::new(bytes, format.mime_type()),
            filename,
            format,
            processing_time,
            token,
            metadata: None,
        },
        GenerationOutput::Text {
            content,
            filename,
            processing_time,
        } => {
            let word_count = content.split_whitespace().count();
            let bytes = content.into_bytes();
            ExportResult {
                size: bytes.len() as u64,
                content: ExportContent::new(bytes, format.mime_type()),
                filename,
                format,
                processing_time,
                token,
                metadata: Some(ResultMetadata::worded(word_count)),
            }
        }
    }
}
