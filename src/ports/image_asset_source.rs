//! Image Asset Source Port - bundled benchmark images.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::benchmark::ImageKind;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for reading the raw bytes of a bundled image.
#[async_trait]
pub trait ImageAssetSource: Send + Sync {
    async fn load(&self, kind: ImageKind) -> Result<Vec<u8>, AssetError>;
}

/// Errors that can occur while loading an asset.
#[derive(Debug, Clone, Error)]
pub enum AssetError {
    #[error("No se pudo cargar {file}: asset not found at {path}")]
    NotFound { file: String, path: String },

    #[error("Failed to read asset {file}: {reason}")]
    Io { file: String, reason: String },
}

impl From<AssetError> for DomainError {
    fn from(err: AssetError) -> Self {
        let code = match err {
            AssetError::NotFound { .. } => ErrorCode::AssetNotFound,
            AssetError::Io { .. } => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_asset_maps_to_asset_not_found() {
        let err: DomainError = AssetError::NotFound {
            file: "original.jpg".to_string(),
            path: "/assets/original.jpg".to_string(),
        }
        .into();

        assert_eq!(err.code(), ErrorCode::AssetNotFound);
        assert!(err.message().contains("original.jpg"));
    }

    #[test]
    fn image_asset_source_is_object_safe() {
        fn check<T: ImageAssetSource + ?Sized>() {}
        check::<dyn ImageAssetSource>();
    }
}
