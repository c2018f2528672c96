//! Storage Permission Port - write access to the shared downloads folder.

use async_trait::async_trait;
use serde::Serialize;

/// Outcome of a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Port for asking the platform for external-storage write access.
///
/// Platforms that do not gate the downloads folder answer `Granted`
/// without prompting.
#[async_trait]
pub trait StoragePermission: Send + Sync {
    async fn request_write_access(&self) -> PermissionStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_granted_is_granted() {
        assert!(PermissionStatus::Granted.is_granted());
        assert!(!PermissionStatus::Denied.is_granted());
    }
}
