//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FORM_PDF` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use form_pdf::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod benchmark;
mod error;
mod pdf;
mod platform;
mod server;
mod storage;

pub use benchmark::BenchmarkConfig;
pub use error::{ConfigError, ValidationError};
pub use pdf::PdfConfig;
pub use platform::{Platform, PlatformConfig, SCOPED_STORAGE_API_LEVEL};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// desktop setup using the markup backend.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Data, documents and downloads directories
    #[serde(default)]
    pub storage: StorageConfig,

    /// PDF backend selection
    #[serde(default)]
    pub pdf: PdfConfig,

    /// Host platform for permission checks
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Image render benchmark
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FORM_PDF` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `FORM_PDF__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FORM_PDF__PDF__BACKEND=document_model` -> `pdf.backend = DocumentModel`
    /// - `FORM_PDF__PLATFORM__API_LEVEL=29` -> `platform.api_level = 29`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FORM_PDF")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        self.pdf.validate()?;
        self.platform.validate()?;
        self.benchmark.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
