//! Document-model PDF generator adapter.
//!
//! Builds a `DocumentDefinition` for the form, renders it in-process and
//! writes the decoded stream into the downloads folder (documents folder
//! when no downloads folder exists). The caller's file name is kept as-is.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::document_definition::form_document;
use super::printpdf_renderer::render_base64;
use crate::domain::form::file_name::verbatim_pdf_name;
use crate::domain::form::{FormDataEntity, GeneratedPdf};
use crate::ports::{PdfBackendKind, PdfGenerationError, PdfGenerator};

/// Name used when the caller does not pass one.
pub const DEFAULT_DOCUMENT_FILE_NAME: &str = "FormDocument.pdf";

const DOCUMENT_TITLE: &str = "Desaway - Datos";

/// PDF generator that renders a document definition with printpdf.
#[derive(Debug, Clone)]
pub struct DocumentModelPdfGenerator {
    documents_dir: PathBuf,
    downloads_dir: Option<PathBuf>,
}

impl DocumentModelPdfGenerator {
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
            downloads_dir: None,
        }
    }

    /// Prefer this directory when it exists.
    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = Some(dir.into());
        self
    }

    async fn target_dir(&self) -> &Path {
        if let Some(dir) = &self.downloads_dir {
            if tokio::fs::try_exists(dir).await.unwrap_or(false) {
                return dir;
            }
        }
        &self.documents_dir
    }
}

#[async_trait]
impl PdfGenerator for DocumentModelPdfGenerator {
    async fn generate_pdf(
        &self,
        input: &FormDataEntity,
        file_name: Option<&str>,
    ) -> Result<GeneratedPdf, PdfGenerationError> {
        let file_name = verbatim_pdf_name(file_name.unwrap_or(DEFAULT_DOCUMENT_FILE_NAME));
        let definition = form_document(input);

        tracing::info!(file_name = %file_name, "Generating document-model PDF");

        let encoded = tokio::task::spawn_blocking(move || render_base64(&definition, DOCUMENT_TITLE))
            .await
            .map_err(|e| PdfGenerationError::render_failed(format!("Render task failed: {}", e)))??;

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| PdfGenerationError::render_failed(format!("Invalid base64 stream: {}", e)))?;

        let dir = self.target_dir().await;
        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            PdfGenerationError::io(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let target = dir.join(&file_name);
        tokio::fs::write(&target, &bytes).await.map_err(|e| {
            tracing::error!(path = %target.display(), error = %e, "Failed to write PDF");
            PdfGenerationError::io(format!("Failed to write {}: {}", target.display(), e))
        })?;

        if !tokio::fs::try_exists(&target).await.unwrap_or(false) {
            return Err(PdfGenerationError::MissingOutputFile(
                target.display().to_string(),
            ));
        }

        tracing::info!(path = %target.display(), size = bytes.len(), "Document-model PDF generated");
        Ok(GeneratedPdf::new(target.display().to_string(), file_name))
    }

    fn backend(&self) -> PdfBackendKind {
        PdfBackendKind::DocumentModel
    }
}
