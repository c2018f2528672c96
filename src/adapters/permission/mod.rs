//! Storage permission adapter driven by the configured host platform.
//!
//! Only Android below API 33 gates writes to the shared downloads folder.
//! There the configured grant decision stands in for the runtime prompt;
//! every other platform answers `Granted` without asking.

use async_trait::async_trait;

use crate::config::{Platform, PlatformConfig};
use crate::ports::{PermissionStatus, StoragePermission};

#[derive(Debug, Clone)]
pub struct PlatformStoragePermission {
    platform: PlatformConfig,
}

impl PlatformStoragePermission {
    pub fn new(platform: PlatformConfig) -> Self {
        Self { platform }
    }
}

#[async_trait]
impl StoragePermission for PlatformStoragePermission {
    async fn request_write_access(&self) -> PermissionStatus {
        if !self.platform.is_legacy_android() {
            return PermissionStatus::Granted;
        }

        let status = if self.platform.legacy_write_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        };
        tracing::info!(
            os = ?Platform::Android,
            api_level = ?self.platform.api_level,
            ?status,
            "Requested legacy external storage write permission"
        );
        status
    }
}
