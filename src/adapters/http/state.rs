//! Shared state for the screen endpoints.

use std::sync::Arc;

use crate::application::{FormScreen, ImageRenderBenchmark, ViewerScreen};
use crate::ports::{HtmlConverter, PdfBackendKind};

/// Application state cloned into every handler.
#[derive(Clone)]
pub struct ApiState {
    pub form: Arc<FormScreen>,
    pub viewer: Arc<ViewerScreen>,
    pub benchmark: Arc<ImageRenderBenchmark>,
    pub converter: Arc<dyn HtmlConverter>,
    pub backend: PdfBackendKind,
}
