//! Markup PDF generator adapter.
//!
//! Renders the form as a two-page HTML report and hands it to an
//! `HtmlConverter`. The output name always carries a timestamp so repeated
//! submissions never overwrite each other.
//!
//! # Architecture
//!
//! This adapter implements the `PdfGenerator` port. The converter itself is
//! another port, so the report template can be tested without an external
//! binary installed.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::form::file_name::timestamped_stem;
use crate::domain::form::{FormDataEntity, GeneratedPdf};
use crate::domain::foundation::FileStamp;
use crate::ports::{
    ConversionRequest, HtmlConverter, PdfBackendKind, PdfGenerationError, PdfGenerator,
};

/// Name used when the caller does not pass one.
pub const DEFAULT_MARKUP_FILE_NAME: &str = "FormReport.pdf";

/// Base used when the caller's name is only an extension.
const FALLBACK_BASE: &str = "FormReport";

/// PDF generator that converts an HTML report through an external converter.
pub struct MarkupPdfGenerator {
    converter: Arc<dyn HtmlConverter>,
    documents_dir: PathBuf,
}

impl MarkupPdfGenerator {
    pub fn new(converter: Arc<dyn HtmlConverter>, documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            converter,
            documents_dir: documents_dir.into(),
        }
    }
}

#[async_trait]
impl PdfGenerator for MarkupPdfGenerator {
    async fn generate_pdf(
        &self,
        input: &FormDataEntity,
        file_name: Option<&str>,
    ) -> Result<GeneratedPdf, PdfGenerationError> {
        let requested = file_name.unwrap_or(DEFAULT_MARKUP_FILE_NAME);
        let stem = timestamped_stem(requested, FALLBACK_BASE, FileStamp::now());

        tracing::info!(file_name = %stem, "Generating markup PDF");

        let request = ConversionRequest {
            html: render_report_html(input),
            file_name: stem.clone(),
            directory: self.documents_dir.clone(),
        };

        let output = self.converter.convert(request).await.map_err(|e| {
            tracing::error!(error = %e, "HTML conversion failed");
            PdfGenerationError::from(e)
        })?;

        let path = output.file_path.ok_or_else(|| {
            tracing::error!(file_name = %stem, "Converter reported no output path");
            PdfGenerationError::NoOutputPath
        })?;

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return Err(PdfGenerationError::MissingOutputFile(
                path.display().to_string(),
            ));
        }

        let generated = GeneratedPdf::new(path.display().to_string(), format!("{}.pdf", stem));
        tracing::info!(path = %generated.file_path, "Markup PDF generated");
        Ok(generated)
    }

    fn backend(&self) -> PdfBackendKind {
        PdfBackendKind::Markup
    }
}

/// Two-page HTML report for `input`.
pub fn render_report_html(input: &FormDataEntity) -> String {
    let first_page = report_page(
        &[
            ("Dato 1", html_escape(&input.text_value)),
            ("Dato 2", html_escape(&input.option_value)),
        ],
        1,
        false,
    );
    let second_page = report_page(&[("Dato 3", input.numeric_value.to_string())], 2, true);

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Reporte de Datos</title>
    <style>
{css}
    </style>
</head>
<body>
{first_page}
{second_page}
</body>
</html>"#,
        css = REPORT_CSS,
        first_page = first_page,
        second_page = second_page
    )
}

const REPORT_PAGES: usize = 2;

fn report_page(fields: &[(&str, String)], number: usize, page_break: bool) -> String {
    let class = if page_break { "page pb" } else { "page" };
    let rows: String = fields
        .iter()
        .map(|(label, value)| {
            format!(
                r#"                <p class="label">{}: <span class="value">{}</span></p>
"#,
                label, value
            )
        })
        .collect();

    format!(
        r#"    <div class="{class}">
        <h1>Reporte de Datos</h1>
        <div class="divider"></div>
        <div class="report-info">
            <h2>Información del Reporte</h2>
            <div class="report-info-text-container">
{rows}            </div>
        </div>
        <div class="footer">
            <div class="page-number">{number}/{total}</div>
        </div>
    </div>"#,
        class = class,
        rows = rows,
        number = number,
        total = REPORT_PAGES
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const REPORT_CSS: &str = r#"        @page { size: A4; margin: 0; }
        body { font-family: Arial, sans-serif; color: #4D406E; margin: 0; padding: 0; }
        .page { width: 100%; height: 100vh; padding: 40px 50px; box-sizing: border-box; position: relative; }
        h1 { font-size: 70px; font-weight: 600; text-align: center; margin-bottom: 8px; padding-top: 100px; }
        .divider { width: 85%; height: 2px; background-color: #4D406E; margin: 0 auto 20px auto; }
        .report-info { padding-left: 30px; }
        .report-info h2 { font-size: 40px; font-weight: bold; margin: 20px 0 0 0; }
        .report-info-text-container { margin-top: 50px; }
        .label { font-weight: bold; font-size: 30px; margin: 0 0 50px 0; }
        .value { font-size: 25px; color: #444; font-weight: 400; }
        .footer { position: absolute; bottom: 40px; left: 0; right: 0; text-align: center; }
        .page-number { font-size: 20px; color: #444; }
        .pb { page-break-before: always; }"#;

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ConversionError, ConversionOutput};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Writes a placeholder PDF where asked and records every request.
    struct FileWritingConverter {
        requests: Mutex<Vec<ConversionRequest>>,
    }

    impl FileWritingConverter {
        fn new() -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> ConversionRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl HtmlConverter for FileWritingConverter {
        async fn convert(
            &self,
            request: ConversionRequest,
        ) -> Result<ConversionOutput, ConversionError> {
            std::fs::create_dir_all(&request.directory).unwrap();
            let target = request.target_path();
            std::fs::write(&target, b"%PDF-1.4 test").unwrap();
            self.requests.lock().unwrap().push(request);
            Ok(ConversionOutput {
                file_path: Some(target),
            })
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    /// Claims success without producing anything.
    struct SilentConverter {
        report_path: Option<PathBuf>,
    }

    #[async_trait]
    impl HtmlConverter for SilentConverter {
        async fn convert(&self, _: ConversionRequest) -> Result<ConversionOutput, ConversionError> {
            Ok(ConversionOutput {
                file_path: self.report_path.clone(),
            })
        }

        async fn is_available(&self) -> bool {
            true
        }
    }

    struct FailingConverter;

    #[async_trait]
    impl HtmlConverter for FailingConverter {
        async fn convert(&self, _: ConversionRequest) -> Result<ConversionOutput, ConversionError> {
            Err(ConversionError::failed("exit status 1"))
        }

        async fn is_available(&self) -> bool {
            false
        }
    }

    fn sample() -> FormDataEntity {
        FormDataEntity::new("abc", 42, "opcion1")
    }

    fn is_timestamped_pdf(name: &str) -> bool {
        let Some(stem) = name.strip_suffix(".pdf") else {
            return false;
        };
        let Some((base, stamp)) = stem.rsplit_once('_') else {
            return false;
        };
        !base.is_empty()
            && base
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
            && stamp.len() == 14
            && stamp.chars().all(|c| c.is_ascii_digit())
    }

    // ─────────────────────────────────────────────────────────────────────
    // File naming
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn default_name_is_timestamped() {
        let dir = TempDir::new().unwrap();
        let generator = MarkupPdfGenerator::new(Arc::new(FileWritingConverter::new()), dir.path());

        let pdf = generator.generate_pdf(&sample(), None).await.unwrap();

        assert!(pdf.file_name.starts_with("FormReport_"));
        assert!(is_timestamped_pdf(&pdf.file_name), "{}", pdf.file_name);
        assert!(!pdf.file_path.is_empty());
        assert!(std::path::Path::new(&pdf.file_path).exists());
    }

    #[tokio::test]
    async fn explicit_name_gets_exactly_one_extension() {
        let dir = TempDir::new().unwrap();
        let generator = MarkupPdfGenerator::new(Arc::new(FileWritingConverter::new()), dir.path());

        let without = generator.generate_pdf(&sample(), Some("informe")).await.unwrap();
        let with = generator.generate_pdf(&sample(), Some("informe.PDF")).await.unwrap();

        for pdf in [without, with] {
            assert!(pdf.file_name.starts_with("informe_"));
            assert_eq!(pdf.file_name.matches(".pdf").count(), 1);
            assert!(!pdf.file_name.to_lowercase().contains(".pdf_"));
        }
    }

    #[tokio::test]
    async fn extension_only_name_falls_back_to_default_base() {
        let dir = TempDir::new().unwrap();
        let generator = MarkupPdfGenerator::new(Arc::new(FileWritingConverter::new()), dir.path());

        let pdf = generator.generate_pdf(&sample(), Some(".pdf")).await.unwrap();

        assert!(pdf.file_name.starts_with("FormReport_"));
    }

    #[tokio::test]
    async fn converter_receives_stem_and_documents_dir() {
        let dir = TempDir::new().unwrap();
        let converter = Arc::new(FileWritingConverter::new());
        let generator = MarkupPdfGenerator::new(converter.clone(), dir.path());

        let pdf = generator.generate_pdf(&sample(), Some("a.pdf")).await.unwrap();
        let request = converter.last_request();

        assert_eq!(request.directory, dir.path());
        assert_eq!(format!("{}.pdf", request.file_name), pdf.file_name);
        assert!(!request.file_name.ends_with(".pdf"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Failure paths
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn no_output_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let generator =
            MarkupPdfGenerator::new(Arc::new(SilentConverter { report_path: None }), dir.path());

        let result = generator.generate_pdf(&sample(), None).await;

        assert!(matches!(result, Err(PdfGenerationError::NoOutputPath)));
    }

    #[tokio::test]
    async fn reported_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let generator = MarkupPdfGenerator::new(
            Arc::new(SilentConverter {
                report_path: Some(dir.path().join("ghost.pdf")),
            }),
            dir.path(),
        );

        let result = generator.generate_pdf(&sample(), None).await;

        assert!(matches!(result, Err(PdfGenerationError::MissingOutputFile(_))));
    }

    #[tokio::test]
    async fn converter_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let generator = MarkupPdfGenerator::new(Arc::new(FailingConverter), dir.path());

        let result = generator.generate_pdf(&sample(), None).await;

        assert!(matches!(
            result,
            Err(PdfGenerationError::Conversion(ConversionError::Failed(_)))
        ));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Template
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn report_has_two_pages_with_values() {
        let html = render_report_html(&sample());

        assert_eq!(html.matches("<h1>Reporte de Datos</h1>").count(), 2);
        assert!(html.contains("Dato 1: <span class=\"value\">abc</span>"));
        assert!(html.contains("Dato 2: <span class=\"value\">opcion1</span>"));
        assert!(html.contains("Dato 3: <span class=\"value\">42</span>"));
        assert!(html.contains("1/2"));
        assert!(html.contains("2/2"));
        assert!(html.contains("page-break-before: always"));
        assert_eq!(html.matches("class=\"page pb\"").count(), 1);
    }

    #[test]
    fn report_escapes_user_values() {
        let input = FormDataEntity::new("<script>alert('x')</script>", 1, "A & B");

        let html = render_report_html(&input);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn html_escape_escapes_special_chars() {
        assert_eq!(html_escape("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
    }

    #[test]
    fn backend_is_markup() {
        let generator = MarkupPdfGenerator::new(Arc::new(FailingConverter), "/tmp");
        assert_eq!(generator.backend(), PdfBackendKind::Markup);
    }
}
