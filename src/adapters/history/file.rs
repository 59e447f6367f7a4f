//! JSON-lines export history
//!
//! One record per line, appended after every successful export. A line
//! that fails to parse is skipped with a warning rather than poisoning
//! the whole history.

use crate::adapters::history::traits::{ExportHistorySink, ExportRecord};
use crate::domain::{DossierError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// History sink backed by a JSON-lines file
#[derive(Debug, Clone)]
pub struct FileHistorySink {
    path: PathBuf,
}

impl FileHistorySink {
    /// Create a sink appending to the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ExportHistorySink for FileHistorySink {
    async fn record(&self, record: &ExportRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DossierError::History(e.to_string()))?;
        }

        let mut line = serde_json::to_string(record)
            .map_err(|e| DossierError::History(e.to_string()))?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| DossierError::History(format!("{}: {e}", self.path.display())))?;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| DossierError::History(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| DossierError::History(e.to_string()))?;

        Ok(())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<ExportRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(DossierError::History(format!(
                    "{}: {e}",
                    self.path.display()
                )))
            }
        };

        let mut records = Vec::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            match serde_json::from_str::<ExportRecord>(line) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed history line");
                }
            }
        }

        let skip = records.len().saturating_sub(limit);
        Ok(records.split_off(skip))
    }
}
