//! Host platform description for the storage permission check

use serde::Deserialize;

use super::error::ValidationError;

/// First Android API level that no longer gates the downloads folder
pub const SCOPED_STORAGE_API_LEVEL: u32 = 33;

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    #[serde(default)]
    pub os: Platform,

    /// Android API level; required when `os = android`
    pub api_level: Option<u32>,

    /// Answer to the legacy write-external-storage prompt
    #[serde(default = "default_legacy_write_granted")]
    pub legacy_write_granted: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    #[default]
    Desktop,
}

impl PlatformConfig {
    /// Android below API 33 still needs the runtime write permission
    pub fn is_legacy_android(&self) -> bool {
        self.os == Platform::Android
            && self
                .api_level
                .is_some_and(|level| level < SCOPED_STORAGE_API_LEVEL)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.os == Platform::Android && self.api_level.is_none() {
            return Err(ValidationError::MissingRequired("platform.api_level"));
        }
        Ok(())
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            os: Platform::default(),
            api_level: None,
            legacy_write_granted: default_legacy_write_granted(),
        }
    }
}

fn default_legacy_write_granted() -> bool {
    true
}
