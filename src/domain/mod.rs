//! Domain models and types for Dossier.
//!
//! This module contains the core domain models, types, and business rules
//! for the export pipeline.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`MeetingId`], [`ExportToken`])
//! - **Domain models** ([`Meeting`], [`ExportOptions`], [`ExportResult`],
//!   [`ExportProgress`])
//! - **Error types** ([`DossierError`], [`GeneratorError`],
//!   [`RepositoryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Dossier uses the newtype pattern for identifiers and a closed enum for
//! formats, so an invalid format or an empty meeting id cannot travel past
//! the boundary where it entered:
//!
//! ```
//! use dossier::domain::{ExportFormat, MeetingId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let id = MeetingId::new("weekly-sync")?;
//! let format: ExportFormat = "pdf".parse()?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod errors;
pub mod ids;
pub mod meeting;
pub mod options;
pub mod progress;
pub mod result;

// Re-export commonly used types for convenience
pub use artifact::{ExportContent, ExportResult, ResultMetadata};
pub use errors::{DossierError, GeneratorError, RepositoryError};
pub use ids::{ExportToken, MeetingId};
pub use meeting::{ActionItem, Meeting, MeetingBuilder, TranscriptSegment};
pub use options::{BrandingOptions, ExportFormat, ExportOptions};
pub use progress::{ExportProgress, ExportStage};
pub use result::Result;
