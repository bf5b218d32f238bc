use crate::error::Result;
use crate::storage::{ArtifactStore, PointerRecord, PointerStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Artifact store keeping objects in memory. Intended for tests and local
/// experimentation; locators use a `memory://` scheme.
#[derive(Default)]
pub struct MemoryArtifactStore {
    objects: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryArtifactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored object
    pub async fn objects(&self) -> HashMap<String, Vec<u8>> {
        self.objects.lock().await.clone()
    }
}

#[async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String> {
        self.objects
            .lock()
            .await
            .insert(key.to_string(), bytes.to_vec());
        Ok(format!("memory://{key}"))
    }
}

/// Pointer store keeping records in memory, in save order
#[derive(Default)]
pub struct MemoryPointerStore {
    records: Mutex<Vec<PointerRecord>>,
}

impl MemoryPointerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every saved record
    pub async fn records(&self) -> Vec<PointerRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl PointerStore for MemoryPointerStore {
    async fn save(&self, record: &PointerRecord) -> Result<()> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
