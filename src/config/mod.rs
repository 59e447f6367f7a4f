//! Configuration management for Dossier.
//!
//! TOML-based configuration loading, parsing, and validation with:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `DOSSIER_*` environment variable overrides
//! - Default values for every setting (an empty file is valid)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dossier::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("dossier.toml")?;
//!
//! println!("Meeting store: {}", config.storage.meetings_path);
//! println!("Output dir: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [storage]
//! meetings_path = "meetings.json"
//! history_path = "exports.jsonl"
//!
//! [export]
//! output_dir = "exports"
//! default_format = "pdf"
//! default_template = "professional"
//! converter_tool = "pandoc"
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, DossierConfig, ExportConfig, LoggingConfig, StorageConfig};
