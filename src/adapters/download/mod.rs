//! Delivery sinks
//!
//! The export result is handed to the host environment through a
//! [`DownloadSink`]: a thin, side-effecting bridge with no format logic.
//! Each delivery opens exactly one file handle, writes the bytes, and
//! releases the handle before returning.

use crate::domain::artifact::ExportResult;
use crate::domain::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// One-shot delivery of an export result
#[async_trait]
pub trait DownloadSink: Send + Sync {
    /// Deliver the result, returning where it landed
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be written.
    async fn deliver(&self, result: &ExportResult) -> Result<PathBuf>;
}

/// Delivery sink writing into a directory on disk
#[derive(Debug, Clone)]
pub struct DiskSink {
    output_dir: PathBuf,
}

impl DiskSink {
    /// Create a sink writing into the given directory
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Target directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl DownloadSink for DiskSink {
    async fn deliver(&self, result: &ExportResult) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(&result.filename);

        // One handle per delivery: create, write, flush, drop.
        let mut file = tokio::fs::File::create(&path).await?;
        file.write_all(&result.content.bytes).await?;
        file.flush().await?;
        drop(file);

        tracing::info!(
            path = %path.display(),
            bytes = result.size,
            "Export delivered"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::artifact::ExportContent;
    use crate::domain::ids::ExportToken;
    use crate::domain::options::ExportFormat;
    use std::time::Duration;

    fn result() -> ExportResult {
        ExportResult {
            content: ExportContent::new(b"hello world".to_vec(), "text/plain"),
            filename: "standup-2026-08-07.txt".to_string(),
            size: 11,
            format: ExportFormat::Txt,
            processing_time: Duration::from_millis(5),
            token: ExportToken::new(),
            metadata: None,
        }
    }

    #[tokio::test]
    async fn test_deliver_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path());

        let path = sink.deliver(&result()).await.unwrap();
        assert_eq!(path, dir.path().join("standup-2026-08-07.txt"));

        let bytes = tokio::fs::read(&path).await.unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[tokio::test]
    async fn test_deliver_creates_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DiskSink::new(dir.path().join("nested/exports"));
        let path = sink.deliver(&result()).await.unwrap();
        assert!(path.exists());
    }
}
