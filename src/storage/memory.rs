//! In-Memory Object Store
//!
//! HashMap-backed implementation of the object-store trait, used for local
//! runs without a data directory and as the test fixture backend.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{ListPage, ObjectMeta, ObjectStore};
use crate::error::Result;

struct StoredObject {
    bytes: Vec<u8>,
    created_at: DateTime<Utc>,
}

// == Memory Store ==
/// In-memory object store with lexicographic key pagination.
///
/// The continuation token is the last key of the previous page; keys are
/// listed in sorted order, so the token marks an exact resume point even
/// when objects are inserted or removed between pages.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an object with an explicit creation time.
    ///
    /// Backends normally stamp creation times themselves; this hook exists
    /// so tests can construct listings with known timestamps.
    pub async fn insert_at(&self, key: &str, bytes: Vec<u8>, created_at: DateTime<Utc>) {
        self.objects
            .write()
            .await
            .insert(key.to_string(), StoredObject { bytes, created_at });
    }

    /// Number of stored objects.
    pub async fn len(&self) -> usize {
        self.objects.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.objects.read().await.is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        self.insert_at(key, bytes, Utc::now()).await;
        Ok(())
    }

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.objects.read().await.get(key).map(|o| o.bytes.clone()))
    }

    async fn delete_object(&self, key: &str) -> Result<bool> {
        Ok(self.objects.write().await.remove(key).is_some())
    }

    async fn object_exists(&self, key: &str) -> Result<bool> {
        Ok(self.objects.read().await.contains_key(key))
    }

    async fn list_objects(&self, page_size: usize, token: Option<&str>) -> Result<ListPage> {
        let page_size = page_size.max(1);
        let objects = self.objects.read().await;

        let mut keys: Vec<&String> = objects
            .keys()
            .filter(|k| token.map_or(true, |t| k.as_str() > t))
            .collect();
        keys.sort();

        let has_more = keys.len() > page_size;
        keys.truncate(page_size);

        let entries: Vec<ObjectMeta> = keys
            .iter()
            .map(|k| ObjectMeta {
                key: (*k).clone(),
                created_at: objects[*k].created_at,
            })
            .collect();

        let next_token = if has_more {
            entries.last().map(|e| e.key.clone())
        } else {
            None
        };

        Ok(ListPage {
            entries,
            next_token,
        })
    }
}
