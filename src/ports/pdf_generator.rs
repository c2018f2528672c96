//! PDF Generator Port - turns a form entity into a PDF file.
//!
//! Two interchangeable adapters implement this contract: one converts an
//! HTML rendition through an external converter, the other builds the
//! document programmatically. The composition root picks one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::html_converter::ConversionError;
use crate::domain::form::{FormDataEntity, GeneratedPdf};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Port for generating a PDF from the form values.
///
/// # Contract
///
/// Implementations must:
/// - Leave `input` untouched (it is borrowed immutably)
/// - Fall back to a fixed default name when `file_name` is `None`
/// - Return a `GeneratedPdf` whose `file_path` exists on disk and whose
///   `file_name` ends in `.pdf`
/// - Fail instead of returning a descriptor when no file was produced
#[async_trait]
pub trait PdfGenerator: Send + Sync {
    /// Generate a PDF for `input`.
    async fn generate_pdf(
        &self,
        input: &FormDataEntity,
        file_name: Option<&str>,
    ) -> Result<GeneratedPdf, PdfGenerationError>;

    /// Which strategy this generator implements.
    fn backend(&self) -> PdfBackendKind;
}

/// The available generation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PdfBackendKind {
    /// HTML document converted by an external tool.
    #[default]
    Markup,
    /// Document definition rendered in-process.
    DocumentModel,
}

impl std::fmt::Display for PdfBackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PdfBackendKind::Markup => write!(f, "markup"),
            PdfBackendKind::DocumentModel => write!(f, "document_model"),
        }
    }
}

/// Errors that can occur during PDF generation.
#[derive(Debug, Clone, Error)]
pub enum PdfGenerationError {
    /// Converter finished without reporting an output path.
    #[error("No se pudo generar el PDF HTML: converter reported no output path")]
    NoOutputPath,

    /// Reported output is not on disk.
    #[error("Generated PDF not found at {0}")]
    MissingOutputFile(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// In-process rendering failed.
    #[error("PDF rendering failed: {0}")]
    RenderFailed(String),

    /// Writing the PDF to disk failed.
    #[error("I/O error while writing PDF: {0}")]
    Io(String),
}

impl PdfGenerationError {
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }

    pub fn io(reason: impl Into<String>) -> Self {
        Self::Io(reason.into())
    }
}

impl From<PdfGenerationError> for DomainError {
    fn from(err: PdfGenerationError) -> Self {
        DomainError::new(
            ErrorCode::GenerationFailed,
            "No se pudo generar el PDF. Revisa la consola para más detalles.",
        )
        .with_detail("cause", err.to_string())
    }
}
