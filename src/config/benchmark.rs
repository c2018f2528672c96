//! Image render benchmark settings

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    /// Directory holding `original.jpg` and `optimized.jpg`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.assets_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDirectory("benchmark.assets_dir"));
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
        }
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./assets/images")
}
