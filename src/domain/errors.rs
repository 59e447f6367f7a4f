//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.
//! Fatal errors propagate through [`crate::domain::Result`]; best-effort
//! failures (history writes, progress listeners) are consumed and logged
//! at their call sites and never travel through this hierarchy.

use thiserror::Error;

/// Main Dossier error type
///
/// This is the primary error type used throughout the crate. It wraps
/// specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum DossierError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The requested meeting does not exist in the repository
    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    /// Format label outside the known enumeration
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Generator-related errors
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Meeting repository errors
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Export history sink errors
    #[error("History error: {0}")]
    History(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Terminal wrapper applied by the export coordinator; the cause's
    /// text is preserved verbatim so callers can pattern-match on it
    #[error("Export failed: {0}")]
    ExportFailed(String),
}

/// Generator-specific errors
///
/// Errors that occur while producing document content. These don't expose
/// the underlying converter tool's types.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The external converter tool is not available in this environment
    #[error("Converter tool not available: {0}")]
    ToolUnavailable(String),

    /// The converter tool ran but reported a failure
    #[error("Conversion failed: {0}")]
    ConversionFailed(String),

    /// The converter produced no usable output
    #[error("Converter produced no output: {0}")]
    OutputMissing(String),

    /// I/O while staging input or collecting output
    #[error("Generator I/O error: {0}")]
    Io(String),
}

/// Meeting repository errors
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The backing store could not be read
    #[error("Failed to read meeting store: {0}")]
    ReadFailed(String),

    /// The backing store exists but does not parse
    #[error("Malformed meeting store: {0}")]
    Malformed(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for DossierError {
    fn from(err: std::io::Error) -> Self {
        DossierError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for DossierError {
    fn from(err: serde_json::Error) -> Self {
        DossierError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for DossierError {
    fn from(err: toml::de::Error) -> Self {
        DossierError::Configuration(format!("TOML parse error: {err}"))
    }
}
