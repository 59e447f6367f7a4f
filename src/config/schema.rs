//! Configuration schema types
//!
//! This module defines the configuration structure for Dossier. Every
//! section and field has a default, so an empty TOML file is a valid
//! configuration.

use crate::core::registry::TemplateCatalog;
use crate::domain::options::ExportFormat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main Dossier configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DossierConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Meeting and history storage paths
    #[serde(default)]
    pub storage: StorageConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DossierConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.storage.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// Storage paths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON meeting store
    #[serde(default = "default_meetings_path")]
    pub meetings_path: String,

    /// Path of the JSON-lines export history
    #[serde(default = "default_history_path")]
    pub history_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            meetings_path: default_meetings_path(),
            history_path: default_history_path(),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.meetings_path.trim().is_empty() {
            return Err("storage.meetings_path cannot be empty".to_string());
        }
        if self.history_path.trim().is_empty() {
            return Err("storage.history_path cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory delivered exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Format used when the caller doesn't pick one
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Catalog template used when the caller doesn't pick one
    #[serde(default = "default_template")]
    pub default_template: String,

    /// Converter tool used by the PDF and DOCX generators
    #[serde(default = "default_converter_tool")]
    pub converter_tool: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
            default_template: default_template(),
            converter_tool: default_converter_tool(),
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }
        if ExportFormat::from_str(&self.default_format).is_err() {
            return Err(format!(
                "Invalid export.default_format '{}'. Must be one of: pdf, docx, txt, md, json",
                self.default_format
            ));
        }
        if TemplateCatalog::find(&self.default_template).is_none() {
            return Err(format!(
                "Unknown export.default_template '{}'",
                self.default_template
            ));
        }
        if self.converter_tool.trim().is_empty() {
            return Err("export.converter_tool cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily, hourly
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid = ["daily", "hourly"];
        if !valid.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }
        Ok(())
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_meetings_path() -> String {
    "meetings.json".to_string()
}

fn default_history_path() -> String {
    "exports.jsonl".to_string()
}

fn default_output_dir() -> String {
    "exports".to_string()
}

fn default_format() -> String {
    "pdf".to_string()
}

fn default_template() -> String {
    "professional".to_string()
}

fn default_converter_tool() -> String {
    "pandoc".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}
