//! File-based Key-Value Store Adapter
//!
//! Stores each key as its own file under a base directory. Writes go through
//! a temp file and a rename so a crash never leaves a half-written value.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{KeyValueStore, StorageError};

/// File-based key-value store
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a new store rooted at `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileKeyValueStore::new("./data/kv");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Map a key to its file; anything outside `[A-Za-z0-9._-]` becomes `_`
    fn item_path(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", file_stem))
    }

    fn temp_path(&self, key: &str) -> PathBuf {
        let mut path = self.item_path(key).into_os_string();
        path.push(".tmp");
        PathBuf::from(path)
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create store directory {}: {}",
                self.base_path.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.item_path(key);

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let temp_path = self.temp_path(key);
        let final_path = self.item_path(key);

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(value.as_bytes()).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to write temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            StorageError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        tracing::debug!(key, path = %final_path.display(), "Stored item");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.item_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}
