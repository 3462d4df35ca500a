//! Summary Store Module
//!
//! Cache operations over the object-store backend, deriving keys with the
//! URL codec and the gzip/JSON artifact format.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{blob_name, CachedArtifact};
use crate::error::Result;
use crate::storage::ObjectStore;

// == Summary Store ==
/// Cache facade over an object-store backend.
///
/// Constructed once at startup and shared by handle thereafter; all durable
/// state lives in the backend, so the store itself carries no locks and no
/// teardown. Concurrent puts for the same URL race with backend
/// last-write-wins, which is acceptable because artifacts for one URL are
/// equivalent re-derivations rather than conflicting edits.
#[derive(Clone)]
pub struct SummaryStore {
    backend: Arc<dyn ObjectStore>,
}

impl SummaryStore {
    // == Constructor ==
    pub fn new(backend: Arc<dyn ObjectStore>) -> Self {
        Self { backend }
    }

    /// The raw backend handle, for listing queries.
    pub fn backend(&self) -> &Arc<dyn ObjectStore> {
        &self.backend
    }

    // == Put ==
    /// Stores an artifact for a URL, unconditionally overwriting any
    /// existing value with a single backend write.
    pub async fn put(&self, url: &str, artifact: &CachedArtifact) -> Result<()> {
        let key = blob_name(url);
        let bytes = artifact.to_bytes()?;
        self.backend.put_object(&key, bytes).await?;
        info!("Stored summary for {url} in {key}");
        Ok(())
    }

    // == Get ==
    /// Retrieves the cached artifact for a URL.
    ///
    /// `Ok(None)` is a clean miss. An object that exists but fails to parse
    /// surfaces as a storage error, never as a miss.
    pub async fn get(&self, url: &str) -> Result<Option<CachedArtifact>> {
        let key = blob_name(url);
        if !self.backend.object_exists(&key).await? {
            debug!("Cache miss for {url}");
            return Ok(None);
        }

        let Some(bytes) = self.backend.get_object(&key).await? else {
            // Removed between the probe and the download; still a clean miss.
            debug!("Cache miss for {url}");
            return Ok(None);
        };

        let artifact = CachedArtifact::from_bytes(&bytes)?;
        info!("Cache hit for {url}");
        Ok(Some(artifact))
    }

    // == Delete ==
    /// Removes the cached artifact for a URL.
    ///
    /// Returns false when nothing was stored, so repeat deletes are
    /// idempotent and skip the backend delete call.
    pub async fn delete(&self, url: &str) -> Result<bool> {
        let key = blob_name(url);
        if !self.backend.object_exists(&key).await? {
            return Ok(false);
        }
        self.backend.delete_object(&key).await
    }

    // == Exists ==
    /// Existence probe without downloading the payload.
    pub async fn exists(&self, url: &str) -> Result<bool> {
        self.backend.object_exists(&blob_name(url)).await
    }
}
