//! Application handlers.
//!
//! The generate-PDF use case plus one handler per screen. Screen handlers
//! turn port errors into `DomainError` and own the in-flight guards.

mod form_screen;
mod generate_pdf;
mod image_benchmark;
mod in_flight;
mod viewer_screen;

pub use form_screen::{FormScreen, FormState};
pub use generate_pdf::GeneratePdfUseCase;
pub use image_benchmark::{image_data_uri, render_benchmark_html, ImageRenderBenchmark};
pub use in_flight::{InFlightGuard, InFlightToken};
pub use viewer_screen::{
    DownloadedPdf, OpenedPdf, ViewerRoute, ViewerScreen, DEFAULT_DOWNLOAD_NAME,
};
