//! Export history abstraction
//!
//! Append-only record of completed exports. Writes are best-effort from
//! the coordinator's perspective: a failing sink is logged and never fails
//! the export that has already succeeded.

use crate::domain::ids::MeetingId;
use crate::domain::options::ExportFormat;
use crate::domain::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    /// Meeting that was exported
    pub meeting_id: MeetingId,

    /// Filename of the produced document
    pub filename: String,

    /// Document size in bytes
    pub size: u64,

    /// Format the export was produced in
    pub format: ExportFormat,

    /// When the export completed
    pub exported_at: DateTime<Utc>,
}

/// Append-only export history
#[async_trait]
pub trait ExportHistorySink: Send + Sync {
    /// Append one record
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be persisted. The coordinator
    /// treats this as non-fatal.
    async fn record(&self, record: &ExportRecord) -> Result<()>;

    /// The newest records, most recent last, at most `limit`
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    async fn recent(&self, limit: usize) -> Result<Vec<ExportRecord>>;
}
