//! Batch export sequencing
//!
//! Drives the single-export state machine over an ordered list of meeting
//! ids, one at a time, under one set of options. Batch-level progress is
//! published under the batch's own token; each item additionally emits its
//! own four-stage sequence under a per-item token.

use crate::core::export::coordinator::ExportCoordinator;
use crate::domain::artifact::ExportResult;
use crate::domain::ids::{ExportToken, MeetingId};
use crate::domain::options::ExportOptions;
use crate::domain::progress::{ExportProgress, ExportStage};
use crate::domain::Result;

/// Batch-level completion percentage before item `index` of `total` runs
pub fn batch_progress(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((index * 100) / total) as u8
}

impl ExportCoordinator {
    /// Export several meetings sequentially, in input order
    ///
    /// Fail-fast: the first item error aborts the batch and the remaining
    /// ids are not attempted. There is no partial-result mode.
    ///
    /// # Errors
    ///
    /// Propagates the first item's `Export failed: ...` error unchanged.
    pub async fn export_meetings_batch(
        &self,
        meeting_ids: &[MeetingId],
        options: &ExportOptions,
    ) -> Result<Vec<ExportResult>> {
        let batch_token = ExportToken::new();
        let total = meeting_ids.len();
        let mut results = Vec::with_capacity(total);

        tracing::info!(
            count = total,
            format = %options.format,
            token = %batch_token,
            "Starting batch export"
        );

        for (index, meeting_id) in meeting_ids.iter().enumerate() {
            self.bus().publish(&ExportProgress::new(
                batch_token,
                ExportStage::Preparing,
                batch_progress(index, total),
                format!("Processing meeting {} of {}...", index + 1, total),
            ));

            let result = self.export_meeting(meeting_id, options).await?;
            results.push(result);
        }

        tracing::info!(
            count = results.len(),
            token = %batch_token,
            "Batch export completed"
        );

        Ok(results)
    }
}
