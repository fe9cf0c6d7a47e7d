//! User-data store abstraction
//!
//! The reading application keeps saved quotes, journal entries and plan
//! progress as whole JSON collections under fixed string keys. This module
//! defines that interface, a file-backed and an in-memory backend, and a
//! typed facade over the three collections.

mod user_data;

pub use user_data::{UserData, JOURNAL_KEY, PLAN_PROGRESS_KEY, QUOTES_KEY};

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use tokio::sync::RwLock;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Get/set of whole serialized collections keyed by a string
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: String) -> StoreResult<()>;
}

/// Stores each key as `<root>/<key>.json`
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to its file, rejecting anything but a single plain name
    fn full_path(&self, key: &str) -> StoreResult<PathBuf> {
        let mut components = Path::new(key).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => {
                Ok(self.root.join(format!("{}.json", name.to_string_lossy())))
            }
            _ => Err(StoreError::InvalidKey(key.to_string())),
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.full_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::BackendError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        let path = self.full_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))?;

        // Write to temp file in same directory (ensures same filesystem for rename)
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, value)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }
}

/// In-memory store (for testing)
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> StoreResult<()> {
        self.data.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").await.unwrap(), None);

        store.set("k", "[1]".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[1]"));

        store.set("k", "[2]".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get("puritanTreasuryQuotes").await.unwrap(), None);
        store
            .set("puritanTreasuryQuotes", "[]".to_string())
            .await
            .unwrap();

        assert!(dir.path().join("data/puritanTreasuryQuotes.json").exists());
        assert_eq!(
            store.get("puritanTreasuryQuotes").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_file_store_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        for key in ["../escape", "a/b", "/etc/passwd", ".", ""] {
            assert!(
                matches!(store.get(key).await, Err(StoreError::InvalidKey(_))),
                "accepted {:?}",
                key
            );
        }
    }
}
