//! Storage locations

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where snapshots, generated PDFs and downloads live
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Key-value store directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// App-private documents directory
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,

    /// Shared downloads directory
    #[serde(default = "default_downloads_dir")]
    pub downloads_dir: PathBuf,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectory("storage.data_dir"));
        }
        if self.documents_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectory("storage.documents_dir"));
        }
        if self.downloads_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectory("storage.downloads_dir"));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            documents_dir: default_documents_dir(),
            downloads_dir: default_downloads_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data/kv")
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("./data/documents")
}

fn default_downloads_dir() -> PathBuf {
    PathBuf::from("./data/downloads")
}
