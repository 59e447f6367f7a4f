// Dossier - Meeting Export Pipeline
// Copyright (c) 2026 Dossier Contributors
// Licensed under the MIT License

//! # Dossier - Meeting Export Pipeline
//!
//! Dossier turns stored meeting records into downloadable documents in any
//! of five formats (PDF, DOCX, plain text, Markdown, JSON), reporting
//! stage progress as it goes and supporting sequential batch export of
//! many meetings.
//!
//! ## Architecture
//!
//! Dossier follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export coordination, progress bus,
//!   format registry, template catalog)
//! - [`adapters`] - External collaborators (generators, meeting storage,
//!   export history, delivery sinks)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dossier::config::load_config;
//! use dossier::core::export::ExportCoordinator;
//! use dossier::domain::{ExportFormat, ExportOptions, MeetingId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("dossier.toml")?;
//!
//!     // Create export coordinator with the default file-backed adapters
//!     let coordinator = ExportCoordinator::from_config(&config)?;
//!
//!     // Export one meeting
//!     let id = MeetingId::new("weekly-sync")?;
//!     let options = ExportOptions::new(ExportFormat::Pdf);
//!     let result = coordinator.export_meeting(&id, &options).await?;
//!
//!     println!("Exported {} ({} bytes)", result.filename, result.size);
//!     Ok(())
//! }
//! ```
//!
//! ## Progress Events
//!
//! Every export publishes four stage events (preparing 10%, generating
//! 30%, finalizing 90%, complete 100%) on the coordinator's progress bus.
//! Events carry a per-call token so listeners can tell concurrent exports
//! apart:
//!
//! ```rust,no_run
//! # use dossier::core::export::ExportCoordinator;
//! # fn example(coordinator: &ExportCoordinator) {
//! let subscription = coordinator.bus().subscribe(|event| {
//!     println!("{} {}% - {}", event.token, event.progress, event.message);
//! });
//! // ... export ...
//! subscription.unsubscribe();
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Dossier uses the [`domain::DossierError`] type for all errors. Export
//! failures are wrapped as `Export failed: <cause>` with the cause's text
//! preserved, so callers can pattern-match on it:
//!
//! ```rust,no_run
//! use dossier::domain::DossierError;
//!
//! # fn example(err: DossierError) {
//! if err.to_string().contains("not found") {
//!     eprintln!("no such meeting");
//! }
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
