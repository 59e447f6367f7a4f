//! Export progress events
//!
//! One export call walks the stages preparing → generating → finalizing →
//! complete, emitting an event per stage with a non-decreasing progress
//! value. Every event carries the export token of the call that produced
//! it, so listeners on the shared bus can tell concurrent exports apart.

use crate::domain::ids::ExportToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Progress checkpoint within one export call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStage {
    /// Request validated, meeting being resolved
    Preparing,
    /// Generator invoked
    Generating,
    /// Output normalized, history being written
    Finalizing,
    /// Result handed to the caller
    Complete,
}

impl ExportStage {
    /// Lowercase stage label
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportStage::Preparing => "preparing",
            ExportStage::Generating => "generating",
            ExportStage::Finalizing => "finalizing",
            ExportStage::Complete => "complete",
        }
    }
}

impl fmt::Display for ExportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One stage-progress event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportProgress {
    /// Correlation token of the export call that emitted this event
    pub token: ExportToken,

    /// Current stage
    pub stage: ExportStage,

    /// Completion percentage, 0-100
    pub progress: u8,

    /// Human-readable status line
    pub message: String,

    /// Rough time remaining, when an estimate is available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_remaining: Option<Duration>,
}

impl ExportProgress {
    /// Create an event without a time estimate
    pub fn new(
        token: ExportToken,
        stage: ExportStage,
        progress: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            token,
            stage,
            progress,
            message: message.into(),
            estimated_time_remaining: None,
        }
    }

    /// Attach a time estimate
    pub fn with_estimate(mut self, remaining: Duration) -> Self {
        self.estimated_time_remaining = Some(remaining);
        self
    }
}
