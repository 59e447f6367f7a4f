//! Core business logic for Dossier.
//!
//! # Modules
//!
//! - [`export`] - export coordination and batch sequencing
//! - [`progress`] - the multicast progress notification bus
//! - [`registry`] - format registry and template catalog
//!
//! # Export Workflow
//!
//! The typical export workflow:
//!
//! 1. **Resolve**: look the meeting up in the repository
//! 2. **Dispatch**: pick the generator registered for the target format
//! 3. **Generate**: produce format-specific output
//! 4. **Normalize**: project the output into the common result shape
//! 5. **Log**: best-effort append to the export history
//! 6. **Report**: publish stage progress on the bus throughout
//!
//! # Example
//!
//! ```rust,no_run
//! use dossier::config::load_config;
//! use dossier::core::export::ExportCoordinator;
//! use dossier::domain::{ExportFormat, ExportOptions, MeetingId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("dossier.toml")?;
//! let coordinator = ExportCoordinator::from_config(&config)?;
//!
//! let id = MeetingId::new("weekly-sync")?;
//! let options = ExportOptions::new(ExportFormat::Pdf);
//! let result = coordinator.export_meeting(&id, &options).await?;
//!
//! println!("Exported {} ({} bytes)", result.filename, result.size);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod progress;
pub mod registry;
