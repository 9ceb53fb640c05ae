//! Implements ReportPort as a pretty-printed JSON snapshot.

use crate::domain::{DomainError, TallyReport};
use crate::ports::ReportPort;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub struct JsonReport {
    out_dir: PathBuf,
}

impl JsonReport {
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Write-replace: temp file, sync_all, then rename over the target, so a reader
    /// never sees a half-written snapshot. The temp file is removed if any step fails.
    async fn write_atomic(path: &Path, body: &[u8]) -> Result<(), DomainError> {
        let temp_path = path.with_extension("json.tmp");
        let result = Self::write_and_rename(&temp_path, path, body).await;
        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }

    async fn write_and_rename(
        temp_path: &Path,
        path: &Path,
        body: &[u8],
    ) -> Result<(), DomainError> {
        let mut f = fs::File::create(temp_path)
            .await
            .map_err(|e| DomainError::Export(format!("create temp file: {}", e)))?;
        f.write_all(body)
            .await
            .map_err(|e| DomainError::Export(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Export(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(temp_path, path)
            .await
            .map_err(|e| DomainError::Export(format!("atomic rename failed: {}", e)))
    }
}

#[async_trait::async_trait]
impl ReportPort for JsonReport {
    fn format(&self) -> &'static str {
        "json"
    }

    async fn write_report(&self, report: &TallyReport) -> Result<PathBuf, DomainError> {
        let json =
            serde_json::to_string_pretty(report).map_err(|e| DomainError::Export(e.to_string()))?;
        fs::create_dir_all(&self.out_dir)
            .await
            .map_err(|e| DomainError::Export(format!("create export dir: {}", e)))?;
        let path = self.out_dir.join(format!("{}.json", report.file_stem()));
        Self::write_atomic(&path, json.as_bytes()).await?;
        Ok(path)
    }
}
