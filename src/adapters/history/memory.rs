//! In-memory export history
//!
//! Used by the test suites to observe what the coordinator records.

use crate::adapters::history::traits::{ExportHistorySink, ExportRecord};
use crate::domain::Result;
use async_trait::async_trait;
use std::sync::RwLock;

/// History sink backed by a process-local vector
#[derive(Debug, Default)]
pub struct MemoryHistorySink {
    records: RwLock<Vec<ExportRecord>>,
}

impl MemoryHistorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn all(&self) -> Vec<ExportRecord> {
        self.records
            .read()
            .expect("history lock poisoned")
            .clone()
    }
}

#[async_trait]
impl ExportHistorySink for MemoryHistorySink {
    async fn record(&self, record: &ExportRecord) -> Result<()> {
        self.records
            .write()
            .expect("history lock poisoned")
            .push(record.clone());
        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ExportRecord>> {
        let records = self.records.read().expect("history lock poisoned");
        let skip = records.len().saturating_sub(limit);
        Ok(records[skip..].to_vec())
    }
}
