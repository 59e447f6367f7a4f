//! JSON-file meeting repository
//!
//! Backs the CLI: a single JSON file holding an array of meeting records.
//! The file is re-read on every call so external edits are picked up
//! without a restart; stores at this scale are small.

use crate::adapters::repository::traits::MeetingRepository;
use crate::domain::ids::MeetingId;
use crate::domain::meeting::Meeting;
use crate::domain::{RepositoryError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Meeting repository backed by one JSON file
#[derive(Debug, Clone)]
pub struct FileMeetingStore {
    path: PathBuf,
}

impl FileMeetingStore {
    /// Create a store reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Meeting>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            RepositoryError::ReadFailed(format!("{}: {e}", self.path.display()))
        })?;

        let meetings: Vec<Meeting> = serde_json::from_str(&contents).map_err(|e| {
            RepositoryError::Malformed(format!("{}: {e}", self.path.display()))
        })?;

        Ok(meetings)
    }
}

#[async_trait]
impl MeetingRepository for FileMeetingStore {
    async fn get_by_id(&self, id: &MeetingId) -> Result<Option<Meeting>> {
        let meetings = self.load().await?;
        Ok(meetings.into_iter().find(|m| &m.id == id))
    }

    async fn list_ids(&self) -> Result<Vec<MeetingId>> {
        let meetings = self.load().await?;
        Ok(meetings.into_iter().map(|m| m.id).collect())
    }
}
