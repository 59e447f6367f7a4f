//! Domain identifier types with validation
//!
//! Newtype wrappers for meeting identifiers and export correlation tokens.
//! Each type ensures type safety and provides validation at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Meeting identifier newtype wrapper
///
/// Represents the unique identifier of a stored meeting record. The format
/// is owned by the repository; Dossier only requires it to be non-empty.
///
/// # Examples
///
/// ```
/// use dossier::domain::ids::MeetingId;
/// use std::str::FromStr;
///
/// let id = MeetingId::from_str("weekly-sync-2026-08-07").unwrap();
/// assert_eq!(id.as_str(), "weekly-sync-2026-08-07");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingId(String);

impl MeetingId {
    /// Creates a new MeetingId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or whitespace-only
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Meeting ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the meeting ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MeetingId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for MeetingId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-call export correlation token
///
/// Minted by the export coordinator once per export call and attached to
/// every progress event that call emits, so listeners on the shared bus can
/// filter to "their" export. Batch exports mint one token for the batch-level
/// events and a fresh token for each item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExportToken(Uuid);

impl ExportToken {
    /// Mint a fresh, unique token
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ExportToken {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExportToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
