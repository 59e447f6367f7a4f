//! Generator abstraction traits
//!
//! Every format family is served by one implementation of
//! [`FormatGenerator`]: a side-effect-free capability probe plus an async
//! generation operation. The registry maps each format to an instance of
//! this trait, so dispatch is closed polymorphism rather than introspection.

use crate::domain::meeting::Meeting;
use crate::domain::options::ExportOptions;
use crate::domain::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Format-specific generation outcome
///
/// Each generator family returns its own shape; the export coordinator is
/// the only component that projects these into the common `ExportResult`.
#[derive(Debug, Clone)]
pub enum GenerationOutput {
    /// Paged binary output (PDF)
    Paged {
        /// Document bytes
        bytes: Vec<u8>,
        /// Suggested filename, extension included
        filename: String,
        /// Time spent generating
        processing_time: Duration,
        /// Number of pages in the document
        page_count: usize,
    },

    /// Unpaged binary output (DOCX)
    Binary {
        /// Document bytes
        bytes: Vec<u8>,
        /// Suggested filename, extension included
        filename: String,
        /// Time spent generating
        processing_time: Duration,
    },

    /// Text-family output (txt/md/json)
    Text {
        /// Document content as a string
        content: String,
        /// Suggested filename, extension included
        filename: String,
        /// Time spent generating
        processing_time: Duration,
    },
}

impl GenerationOutput {
    /// Suggested filename regardless of variant
    pub fn filename(&self) -> &str {
        match self {
            GenerationOutput::Paged { filename, .. } => filename,
            GenerationOutput::Binary { filename, .. } => filename,
            GenerationOutput::Text { filename, .. } => filename,
        }
    }
}

/// One format family's generator
///
/// Implementations must be cheap to probe: `probe` is called on every
/// `list_formats` and must not touch the network or mutate anything.
#[async_trait]
pub trait FormatGenerator: Send + Sync {
    /// Whether this format is currently generatable in this environment
    fn probe(&self) -> bool;

    /// Produce document content for one meeting
    ///
    /// # Errors
    ///
    /// Returns an error if the environment lacks the required tooling or
    /// the conversion itself fails. The coordinator wraps and reports it;
    /// no retry is attempted.
    async fn generate(&self, meeting: &Meeting, options: &ExportOptions)
        -> Result<GenerationOutput>;
}
