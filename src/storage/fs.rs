use crate::error::{Result, ScrapeError};
use crate::storage::{ArtifactStore, PointerRecord, PointerStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Artifact store writing each artifact as one file under a directory.
///
/// Locators are `file://` URLs. Keys carry a fresh unique id per crawl, so
/// existing artifacts are never overwritten.
pub struct FsArtifactStore {
    dir: PathBuf,
}

impl FsArtifactStore {
    /// Create a store rooted at `dir` (created on first write)
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ArtifactStore for FsArtifactStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            ScrapeError::StorageWriteFailed(format!(
                "creating artifact directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.dir.join(key);
        fs::write(&path, bytes).await.map_err(|e| {
            ScrapeError::StorageWriteFailed(format!("writing {}: {}", path.display(), e))
        })?;

        ::log::debug!("Wrote {} byte artifact to {}", bytes.len(), path.display());
        Ok(format!("file://{}", path.display()))
    }
}

/// Pointer store appending one JSON record per line to a single file
pub struct JsonlPointerStore {
    path: PathBuf,
}

impl JsonlPointerStore {
    /// Create a store backed by the file at `path` (created on first save)
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read back every record persisted for `owner`.
    ///
    /// A missing file means no records have been saved yet.
    pub async fn records_for_owner(&self, owner: &str) -> std::io::Result<Vec<PointerRecord>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut records = Vec::new();
        for line in contents.lines().filter(|l| !l.trim().is_empty()) {
            let record: PointerRecord = serde_json::from_str(line)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            if record.owner == owner {
                records.push(record);
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl PointerStore for JsonlPointerStore {
    async fn save(&self, record: &PointerRecord) -> Result<()> {
        let record_write_failed = |message: String| ScrapeError::RecordWriteFailed {
            locator: record.locator.clone(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| record_write_failed(format!("creating {}: {}", parent.display(), e)))?;
        }

        let line = serde_json::to_string(record)
            .map_err(|e| record_write_failed(format!("serializing record: {e}")))?;

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| record_write_failed(format!("opening {}: {}", self.path.display(), e)))?;

        file.write_all(format!("{line}\n").as_bytes())
            .await
            .map_err(|e| record_write_failed(format!("writing {}: {}", self.path.display(), e)))?;
        file.flush()
            .await
            .map_err(|e| record_write_failed(format!("flushing {}: {}", self.path.display(), e)))?;

        ::log::debug!(
            "Saved pointer record {} for owner {}",
            record.unique_id,
            record.owner
        );
        Ok(())
    }
}
