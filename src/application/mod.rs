//! Application layer - use case and screen handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DownloadedPdf, FormScreen, FormState, GeneratePdfUseCase, ImageRenderBenchmark,
    InFlightGuard, OpenedPdf, ViewerRoute, ViewerScreen, DEFAULT_DOWNLOAD_NAME,
};
