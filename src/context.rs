//! Composition root.
//!
//! Builds every adapter once from `AppConfig` and hands the screen handlers
//! their ports. The PDF backend is picked here and nowhere else.

use std::sync::Arc;

use crate::adapters::assets::FileImageAssets;
use crate::adapters::http::ApiState;
use crate::adapters::pdf::{DocumentModelPdfGenerator, MarkupPdfGenerator, WkhtmltopdfConverter};
use crate::adapters::permission::PlatformStoragePermission;
use crate::adapters::storage::{FileKeyValueStore, KeyValueFormStorage};
use crate::application::{FormScreen, GeneratePdfUseCase, ImageRenderBenchmark, ViewerScreen};
use crate::config::AppConfig;
use crate::ports::{
    FormStorage, HtmlConverter, ImageAssetSource, PdfBackendKind, PdfGenerator,
    StoragePermission,
};

/// Process-wide wiring of ports to adapters.
#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub storage: Arc<dyn FormStorage>,
    pub converter: Arc<dyn HtmlConverter>,
    pub generator: Arc<dyn PdfGenerator>,
    pub permission: Arc<dyn StoragePermission>,
    pub assets: Arc<dyn ImageAssetSource>,
}

impl AppContext {
    pub fn from_config(config: AppConfig) -> Self {
        let store = Arc::new(FileKeyValueStore::new(&config.storage.data_dir));
        let storage: Arc<dyn FormStorage> = Arc::new(KeyValueFormStorage::new(store));

        let converter: Arc<dyn HtmlConverter> = Arc::new(match &config.pdf.converter_path {
            Some(path) => WkhtmltopdfConverter::new().with_converter_path(path.as_str()),
            None => WkhtmltopdfConverter::new(),
        });

        let generator = select_generator(&config, converter.clone());

        tracing::info!(
            backend = %generator.backend(),
            data_dir = %config.storage.data_dir.display(),
            documents_dir = %config.storage.documents_dir.display(),
            "PDF backend selected"
        );

        Self {
            storage,
            converter,
            generator,
            permission: Arc::new(PlatformStoragePermission::new(config.platform.clone())),
            assets: Arc::new(FileImageAssets::new(&config.benchmark.assets_dir)),
            config,
        }
    }

    pub fn generate_pdf(&self) -> GeneratePdfUseCase {
        GeneratePdfUseCase::new(self.generator.clone())
    }

    /// Screen handlers bundled as router state.
    pub fn api_state(&self) -> ApiState {
        ApiState {
            form: Arc::new(FormScreen::new(self.storage.clone(), self.generate_pdf())),
            viewer: Arc::new(ViewerScreen::new(
                self.permission.clone(),
                &self.config.storage.documents_dir,
                &self.config.storage.downloads_dir,
            )),
            benchmark: Arc::new(ImageRenderBenchmark::new(
                self.assets.clone(),
                self.converter.clone(),
                &self.config.storage.documents_dir,
            )),
            converter: self.converter.clone(),
            backend: self.generator.backend(),
        }
    }
}

fn select_generator(config: &AppConfig, converter: Arc<dyn HtmlConverter>) -> Arc<dyn PdfGenerator> {
    let documents_dir = &config.storage.documents_dir;
    match config.pdf.backend {
        PdfBackendKind::Markup => Arc::new(MarkupPdfGenerator::new(converter, documents_dir)),
        PdfBackendKind::DocumentModel => Arc::new(
            DocumentModelPdfGenerator::new(documents_dir)
                .with_downloads_dir(&config.storage.downloads_dir),
        ),
    }
}
