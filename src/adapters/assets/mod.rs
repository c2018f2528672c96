//! Benchmark image assets read from a directory on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::benchmark::ImageKind;
use crate::ports::{AssetError, ImageAssetSource};

/// Reads `original.jpg` / `optimized.jpg` from `assets_dir`.
#[derive(Debug, Clone)]
pub struct FileImageAssets {
    assets_dir: PathBuf,
}

impl FileImageAssets {
    pub fn new<P: AsRef<Path>>(assets_dir: P) -> Self {
        Self {
            assets_dir: assets_dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ImageAssetSource for FileImageAssets {
    async fn load(&self, kind: ImageKind) -> Result<Vec<u8>, AssetError> {
        let path = self.assets_dir.join(kind.file_name());

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(%kind, size = bytes.len(), "Loaded benchmark image");
                Ok(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AssetError::NotFound {
                file: kind.file_name().to_string(),
                path: path.display().to_string(),
            }),
            Err(e) => Err(AssetError::Io {
                file: kind.file_name().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
