//! Result type alias for Dossier
//!
//! This module provides a convenient Result type alias that uses
//! [`DossierError`] as the error type.

use super::errors::DossierError;

/// Result type alias for Dossier operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use dossier::domain::result::Result;
/// use dossier::domain::errors::DossierError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(DossierError::UnsupportedFormat("csv".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, DossierError>;
