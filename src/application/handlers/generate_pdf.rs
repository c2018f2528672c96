//! GeneratePdfUseCase - the single entry point for PDF generation.
//!
//! Pure delegation to whichever `PdfGenerator` the composition root injected.
//! Swapping backends never touches callers.

use std::sync::Arc;

use crate::domain::form::{FormDataEntity, GeneratedPdf};
use crate::ports::{PdfBackendKind, PdfGenerationError, PdfGenerator};

/// Use case for generating a PDF from form values.
///
/// # Usage
///
/// ```rust,ignore
/// let use_case = GeneratePdfUseCase::new(generator);
/// let pdf = use_case.execute(&entity, None).await?;
/// println!("{}", pdf.file_path);
/// ```
#[derive(Clone)]
pub struct GeneratePdfUseCase {
    generator: Arc<dyn PdfGenerator>,
}

impl GeneratePdfUseCase {
    pub fn new(generator: Arc<dyn PdfGenerator>) -> Self {
        Self { generator }
    }

    pub async fn execute(
        &self,
        input: &FormDataEntity,
        file_name: Option<&str>,
    ) -> Result<GeneratedPdf, PdfGenerationError> {
        self.generator.generate_pdf(input, file_name).await
    }

    pub fn backend(&self) -> PdfBackendKind {
        self.generator.backend()
    }
}
