//! PDF adapters - the two `PdfGenerator` strategies and the HTML converter.
//!
//! ## Available Adapters
//!
//! - **MarkupPdfGenerator** - HTML report through an `HtmlConverter`, timestamped names
//! - **DocumentModelPdfGenerator** - document definition rendered with printpdf, verbatim names
//! - **WkhtmltopdfConverter** - `HtmlConverter` backed by the `wkhtmltopdf` binary
//!
//! ## Usage
//!
//! ```ignore
//! let converter = Arc::new(WkhtmltopdfConverter::new());
//! let generator: Arc<dyn PdfGenerator> =
//!     Arc::new(MarkupPdfGenerator::new(converter, "./data/documents"));
//! ```

mod document_definition;
mod document_model_pdf_generator;
mod markup_pdf_generator;
mod printpdf_renderer;
mod wkhtmltopdf_converter;

pub use document_definition::{
    form_document, ContentBlock, DocumentDefinition, PageBreak, TextStyle, HEADER_STYLE,
};
pub use document_model_pdf_generator::{DocumentModelPdfGenerator, DEFAULT_DOCUMENT_FILE_NAME};
pub use markup_pdf_generator::{render_report_html, MarkupPdfGenerator, DEFAULT_MARKUP_FILE_NAME};
pub use wkhtmltopdf_converter::WkhtmltopdfConverter;
