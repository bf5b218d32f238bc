pub mod fs;
pub mod memory;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ownership and retrieval metadata for one persisted artifact.
///
/// Written exactly once per whole-site crawl, after the artifact write
/// succeeded, and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerRecord {
    /// Identifier of the user the crawl was run for
    pub owner: String,

    /// Locator of the artifact in the artifact store
    pub locator: String,

    /// Generated identifier of this record
    pub unique_id: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl PointerRecord {
    /// Create a record with a fresh unique id and the current time
    pub fn new(owner: &str, locator: &str) -> Self {
        Self {
            owner: owner.to_string(),
            locator: locator.to_string(),
            unique_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Write-once object storage for crawl artifacts.
///
/// Callers supply keys containing a freshly generated unique id, so a `put`
/// never overwrites an existing artifact. Failures map to
/// `ScrapeError::StorageWriteFailed`.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Write `bytes` under `key` and return a locator for later retrieval
    async fn put(&self, key: &str, bytes: &[u8]) -> Result<String>;
}

/// Persistence for pointer records, queried later by owner.
///
/// Failures map to `ScrapeError::RecordWriteFailed`.
#[async_trait]
pub trait PointerStore: Send + Sync {
    /// Persist one record
    async fn save(&self, record: &PointerRecord) -> Result<()>;
}
