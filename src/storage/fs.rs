//! Filesystem Object Store
//!
//! Flat-directory implementation of the object-store trait. Each object is
//! one regular file; the creation time comes from file metadata.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{ListPage, ObjectMeta, ObjectStore};
use crate::error::{Result, ServiceError};

// == Fs Store ==
/// Filesystem-backed object store rooted at a single directory.
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Opens (creating if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| ServiceError::Storage(format!("create {}: {e}", root.display())))?;
        Ok(Self { root })
    }

    /// Resolves a key to its file path.
    ///
    /// Keys come from the URL codec and are always flat names, but the
    /// storage boundary still refuses anything that could leave the root.
    fn object_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key.contains("..")
            || key.starts_with('.')
        {
            return Err(ServiceError::Storage(format!("invalid object key: {key}")));
        }
        Ok(self.root.join(key))
    }
}

fn created_at(meta: &std::fs::Metadata) -> DateTime<Utc> {
    // Creation time is not available on every filesystem; mtime is the
    // closest substitute and objects here are written once.
    let time = meta.created().or_else(|_| meta.modified());
    match time {
        Ok(t) => DateTime::<Utc>::from(t),
        Err(_) => Utc::now(),
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn put_object(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        let path = self.object_path(key)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ServiceError::Storage(format!("write {}: {e}", path.display())))
    }

    async fn get_object(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.object_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::Storage(format!(
                "read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn delete_object(&self, key: &str) -> Result<bool> {
        let path = self.object_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ServiceError::Storage(format!(
                "delete {}: {e}",
                path.display()
            ))),
        }
    }

    async fn object_exists(&self, key: &str) -> Result<bool> {
        let path = self.object_path(key)?;
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ServiceError::Storage(format!(
                "stat {}: {e}",
                path.display()
            ))),
        }
    }

    async fn list_objects(&self, page_size: usize, token: Option<&str>) -> Result<ListPage> {
        let page_size = page_size.max(1);

        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| ServiceError::Storage(format!("list {}: {e}", self.root.display())))?;

        // Names are collected and sorted so the last-key token marks an
        // exact resume point; metadata is only fetched for the page served.
        let mut names: Vec<String> = Vec::new();
        while let Some(entry) = dir
            .next_entry()
            .await
            .map_err(|e| ServiceError::Storage(format!("list {}: {e}", self.root.display())))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non-UTF-8 file name under {}", self.root.display());
                continue;
            };
            if token.map_or(true, |t| name.as_str() > t) {
                names.push(name);
            }
        }
        names.sort();

        let has_more = names.len() > page_size;
        names.truncate(page_size);
        // The token is the last name examined, not the last entry kept, so
        // a page of skipped non-files still advances the scan.
        let last_name = names.last().cloned();

        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let path = self.root.join(&name);
            let meta = match tokio::fs::metadata(&path).await {
                Ok(m) => m,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(ServiceError::Storage(format!(
                        "stat {}: {e}",
                        path.display()
                    )))
                }
            };
            if !meta.is_file() {
                continue;
            }
            entries.push(ObjectMeta {
                key: name,
                created_at: created_at(&meta),
            });
        }

        let next_token = if has_more { last_name } else { None };

        Ok(ListPage {
            entries,
            next_token,
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, FsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = FsStore::new(dir.path()).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_put_get_delete_roundtrip() {
        let (_dir, store) = temp_store();

        store
            .put_object("aGVsbG8.gz", b"payload".to_vec())
            .await
            .unwrap();

        assert!(store.object_exists("aGVsbG8.gz").await.unwrap());
        assert_eq!(
            store.get_object("aGVsbG8.gz").await.unwrap(),
            Some(b"payload".to_vec())
        );

        assert!(store.delete_object("aGVsbG8.gz").await.unwrap());
        assert!(!store.delete_object("aGVsbG8.gz").await.unwrap());
        assert_eq!(store.get_object("aGVsbG8.gz").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_traversal_keys() {
        let (_dir, store) = temp_store();

        for key in ["../escape", "a/b", "", ".hidden"] {
            assert!(store.put_object(key, vec![]).await.is_err(), "key: {key}");
        }
    }

    #[tokio::test]
    async fn test_list_pagination() {
        let (_dir, store) = temp_store();
        for i in 0..5 {
            store
                .put_object(&format!("obj-{i}"), vec![i as u8])
                .await
                .unwrap();
        }

        let mut seen = Vec::new();
        let mut token: Option<String> = None;
        loop {
            let page = store.list_objects(2, token.as_deref()).await.unwrap();
            seen.extend(page.entries.iter().map(|e| e.key.clone()));
            match page.next_token {
                Some(t) => token = Some(t),
                None => break,
            }
        }

        seen.sort();
        let expected: Vec<String> = (0..5).map(|i| format!("obj-{i}")).collect();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_list_skips_directories() {
        let (dir, store) = temp_store();
        store.put_object("file", vec![]).await.unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();

        let page = store.list_objects(10, None).await.unwrap();
        let keys: Vec<&str> = page.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["file"]);
    }
}
