//! Shared fixtures for the integration suites
//!
//! Stub generators stand in for the converter-backed PDF/DOCX adapters so
//! the pipeline can be exercised without external tooling; the text family
//! uses the real generator.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use dossier::adapters::generators::{FormatGenerator, GenerationOutput, MarkupGenerator};
use dossier::adapters::history::{ExportHistorySink, ExportRecord, MemoryHistorySink};
use dossier::adapters::repository::InMemoryMeetingStore;
use dossier::core::export::ExportCoordinator;
use dossier::core::progress::ProgressBus;
use dossier::core::registry::FormatRegistry;
use dossier::domain::meeting::{ActionItem, Meeting, MeetingBuilder, TranscriptSegment};
use dossier::domain::options::ExportOptions;
use dossier::domain::progress::ExportProgress;
use dossier::domain::{DossierError, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Paged stub standing in for the PDF generator
pub struct StubPdfGenerator;

#[async_trait]
impl FormatGenerator for StubPdfGenerator {
    fn probe(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        meeting: &Meeting,
        _options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        Ok(GenerationOutput::Paged {
            bytes: b"%PDF-1.7 stub document".to_vec(),
            filename: format!("{}.pdf", meeting.id),
            processing_time: Duration::from_millis(12),
            page_count: 3,
        })
    }
}

/// Binary stub standing in for the DOCX generator
pub struct StubDocxGenerator;

#[async_trait]
impl FormatGenerator for StubDocxGenerator {
    fn probe(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        meeting: &Meeting,
        _options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        Ok(GenerationOutput::Binary {
            bytes: vec![0x50, 0x4b, 0x03, 0x04],
            filename: format!("{}.docx", meeting.id),
            processing_time: Duration::from_millis(9),
        })
    }
}

/// Generator that always fails with the given message
pub struct FailingGenerator(pub &'static str);

#[async_trait]
impl FormatGenerator for FailingGenerator {
    fn probe(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        _meeting: &Meeting,
        _options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        Err(dossier::domain::GeneratorError::ConversionFailed(self.0.to_string()).into())
    }
}

/// Wrapper counting how many times the inner generator runs
pub struct CountingGenerator {
    pub calls: Arc<AtomicUsize>,
    inner: Arc<dyn FormatGenerator>,
}

impl CountingGenerator {
    pub fn wrap(inner: Arc<dyn FormatGenerator>) -> (Arc<Self>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Arc::new(Self {
                calls: Arc::clone(&calls),
                inner,
            }),
            calls,
        )
    }
}

#[async_trait]
impl FormatGenerator for CountingGenerator {
    fn probe(&self) -> bool {
        self.inner.probe()
    }

    async fn generate(
        &self,
        meeting: &Meeting,
        options: &ExportOptions,
    ) -> Result<GenerationOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.generate(meeting, options).await
    }
}

/// History sink that always fails
pub struct FailingHistorySink;

#[async_trait]
impl ExportHistorySink for FailingHistorySink {
    async fn record(&self, _record: &ExportRecord) -> Result<()> {
        Err(DossierError::History("disk full".to_string()))
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<ExportRecord>> {
        Ok(Vec::new())
    }
}

/// A complete meeting record for the given id
pub fn sample_meeting(id: &str) -> Meeting {
    MeetingBuilder::new()
        .id(id)
        .unwrap()
        .title(format!("Meeting {id}"))
        .occurred_at(Utc.with_ymd_and_hms(2026, 8, 7, 9, 0, 0).unwrap())
        .duration_minutes(30)
        .participant("Ada")
        .participant("Grace")
        .segment(TranscriptSegment::new("Ada", "Kicking off."))
        .segment(TranscriptSegment::new("Grace", "Status looks green."))
        .summary("Everything on track for the release.")
        .key_point("Release is on schedule")
        .action_item(ActionItem::new("Tag the release candidate").with_owner("Ada"))
        .build()
        .unwrap()
}

/// Default registry: stub PDF/DOCX, real text family
pub fn stub_registry() -> Arc<FormatRegistry> {
    Arc::new(FormatRegistry::new(
        Arc::new(StubPdfGenerator),
        Arc::new(StubDocxGenerator),
        Arc::new(MarkupGenerator::new()),
    ))
}

/// Coordinator over an in-memory store seeded with the given meetings
pub fn coordinator_with(
    meetings: &[&str],
    registry: Arc<FormatRegistry>,
) -> (ExportCoordinator, Arc<MemoryHistorySink>) {
    let store = Arc::new(InMemoryMeetingStore::new());
    for id in meetings {
        store.insert(sample_meeting(id));
    }
    let history = Arc::new(MemoryHistorySink::new());
    let coordinator = ExportCoordinator::new(
        store,
        registry,
        Arc::clone(&history) as Arc<dyn ExportHistorySink>,
        ProgressBus::new(),
    );
    (coordinator, history)
}

/// Record every event the bus publishes
pub fn record_events(coordinator: &ExportCoordinator) -> Arc<Mutex<Vec<ExportProgress>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    // Dropping the handle does not unsubscribe; the recorder stays
    // registered for the test's lifetime.
    let _ = coordinator.bus().subscribe(move |event| {
        sink.lock().unwrap().push(event.clone());
    });
    events
}
