//! HTML Converter Port - external HTML to PDF conversion.
//!
//! The markup PDF backend and the image benchmark hand a complete HTML
//! document to an implementation of this trait and receive the path of the
//! PDF it wrote.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// One conversion job.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Complete HTML document.
    pub html: String,
    /// Output file name without the `.pdf` extension.
    pub file_name: String,
    /// Directory the PDF is written into.
    pub directory: PathBuf,
}

impl ConversionRequest {
    /// Where the converter is expected to write.
    pub fn target_path(&self) -> PathBuf {
        self.directory.join(format!("{}.pdf", self.file_name))
    }
}

/// What the converter reported back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionOutput {
    /// Path of the written PDF; `None` when the converter produced nothing.
    pub file_path: Option<PathBuf>,
}

/// Port for converting HTML documents into PDF files.
///
/// # Contract
///
/// Implementations must:
/// - Write the PDF under `request.directory`
/// - Report the written path, or `None` if no file was produced
/// - Never retry or time out on their own
#[async_trait]
pub trait HtmlConverter: Send + Sync {
    /// Convert `request.html` into a PDF file.
    async fn convert(&self, request: ConversionRequest) -> Result<ConversionOutput, ConversionError>;

    /// Whether the underlying converter can be invoked at all.
    async fn is_available(&self) -> bool;
}

/// Errors that can occur during HTML conversion.
#[derive(Debug, Clone, Error)]
pub enum ConversionError {
    /// External converter is not installed or not runnable.
    #[error("HTML converter unavailable: {0}")]
    Unavailable(String),

    /// Converter ran and failed.
    #[error("HTML conversion failed: {0}")]
    Failed(String),

    /// Filesystem error around the conversion.
    #[error("I/O error during conversion: {0}")]
    Io(String),
}

impl ConversionError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<ConversionError> for DomainError {
    fn from(err: ConversionError) -> Self {
        DomainError::new(ErrorCode::GenerationFailed, "Error al generar el PDF.")
            .with_detail("cause", err.to_string())
    }
}
