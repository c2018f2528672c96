//! ImageRenderBenchmark - how long HTML conversion takes with heavy images.
//!
//! Embeds one bundled image 46 times as a data URI, converts the page with
//! the same `HtmlConverter` the markup backend uses, and records how long the
//! conversion and the whole run took. Results stay in memory for the
//! original-vs-optimized comparison.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tokio::sync::RwLock;

use super::in_flight::InFlightGuard;
use crate::domain::benchmark::{
    BenchmarkComparison, BenchmarkResult, GridColumns, ImageKind, BENCHMARK_IMAGE_COUNT,
};
use crate::domain::foundation::{DomainError, ErrorCode, FileStamp, Timestamp};
use crate::ports::{ConversionRequest, HtmlConverter, ImageAssetSource};

/// Handler behind the image render test screen.
///
/// # Dependencies
///
/// - `ImageAssetSource`: bundled JPEGs
/// - `HtmlConverter`: the converter under test
pub struct ImageRenderBenchmark {
    assets: Arc<dyn ImageAssetSource>,
    converter: Arc<dyn HtmlConverter>,
    documents_dir: PathBuf,
    results: RwLock<Vec<BenchmarkResult>>,
    guard: InFlightGuard,
}

impl ImageRenderBenchmark {
    pub fn new(
        assets: Arc<dyn ImageAssetSource>,
        converter: Arc<dyn HtmlConverter>,
        documents_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            assets,
            converter,
            documents_dir: documents_dir.into(),
            results: RwLock::new(Vec::new()),
            guard: InFlightGuard::new(),
        }
    }

    /// Generate one benchmark PDF and record the timings.
    pub async fn run(
        &self,
        kind: ImageKind,
        columns: GridColumns,
    ) -> Result<BenchmarkResult, DomainError> {
        let _token = self.guard.begin("benchmark")?;
        let started = Instant::now();

        tracing::info!(%kind, columns = columns.count(), "Starting image render benchmark");

        let image = self.assets.load(kind).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load benchmark image");
            DomainError::from(e)
        })?;
        let data_uri = image_data_uri(&image);
        tracing::debug!(
            image_bytes = image.len(),
            encoded_bytes = data_uri.len(),
            "Encoded benchmark image"
        );

        let generated_at = chrono::Local::now().format("%d/%m/%Y %H:%M:%S").to_string();
        let html = render_benchmark_html(&data_uri, kind, columns, &generated_at);

        let request = ConversionRequest {
            html,
            file_name: format!("ImageTest_{}_{}", kind, FileStamp::now()),
            directory: self.documents_dir.clone(),
        };

        let conversion_started = Instant::now();
        let output = self.converter.convert(request).await.map_err(|e| {
            tracing::error!(error = %e, "Benchmark conversion failed");
            DomainError::from(e)
        })?;
        let conversion_time_ms = elapsed_ms(conversion_started);

        let file_path = output.file_path.ok_or_else(|| {
            DomainError::new(ErrorCode::GenerationFailed, "No se pudo generar el PDF")
        })?;

        let pdf_size_bytes = match tokio::fs::metadata(&file_path).await {
            Ok(meta) => Some(meta.len()),
            Err(e) => {
                tracing::warn!(path = %file_path.display(), error = %e, "Could not stat benchmark PDF");
                None
            }
        };

        let result = BenchmarkResult {
            image_type: kind,
            columns,
            generation_time_ms: elapsed_ms(started),
            conversion_time_ms,
            pdf_size_bytes,
            file_path: file_path.display().to_string(),
            timestamp: Timestamp::now(),
        };

        tracing::info!(
            %kind,
            generation_time_ms = result.generation_time_ms,
            conversion_time_ms = result.conversion_time_ms,
            size_mb = result.size_mb(),
            path = %result.file_path,
            "Benchmark PDF generated"
        );

        self.results.write().await.push(result.clone());
        Ok(result)
    }

    /// All results, oldest first.
    pub async fn results(&self) -> Vec<BenchmarkResult> {
        self.results.read().await.clone()
    }

    pub async fn last_result(&self) -> Option<BenchmarkResult> {
        self.results.read().await.last().cloned()
    }

    pub async fn clear_results(&self) {
        self.results.write().await.clear();
        tracing::info!("Benchmark results cleared");
    }

    /// `None` until both image kinds have a result.
    pub async fn comparison(&self) -> Option<BenchmarkComparison> {
        BenchmarkComparison::from_results(&self.results.read().await)
    }

    pub fn is_running(&self) -> bool {
        self.guard.is_busy()
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// JPEG bytes as an inline `data:` URI.
pub fn image_data_uri(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes))
}

/// The benchmark page: header, a grid of `BENCHMARK_IMAGE_COUNT` cells, footer.
pub fn render_benchmark_html(
    data_uri: &str,
    kind: ImageKind,
    columns: GridColumns,
    generated_at: &str,
) -> String {
    let cells: String = (1..=BENCHMARK_IMAGE_COUNT)
        .map(|i| {
            format!(
                r#"
        <div class="image-container">
            <img src="{src}" alt="Imagen {i}" />
            <div class="image-label">#{i} ({size})</div>
        </div>"#,
                src = data_uri,
                i = i,
                size = kind.size_label()
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8" />
    <style>
        @page {{ size: A4; margin: 15px; }}
        body {{ font-family: Arial, sans-serif; color: #4D406E; margin: 0; padding: 15px; }}
        .header {{ text-align: center; margin-bottom: 15px; padding-bottom: 8px; border-bottom: 2px solid #4D406E; }}
        .header h1 {{ margin: 0 0 5px 0; font-size: 20px; }}
        .header p {{ margin: 2px 0; font-size: 11px; color: #666; }}
        .image-grid {{ display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 10px; margin-top: 15px; }}
        .image-container {{ position: relative; border: 2px solid #4D406E; border-radius: 6px; overflow: hidden; page-break-inside: avoid; background-color: #f5f5f5; }}
        .image-container img {{ width: 100%; display: block; }}
        .image-label {{ position: absolute; bottom: 3px; right: 3px; background-color: rgba(77, 64, 110, 0.9); color: white; padding: 2px 6px; border-radius: 3px; font-size: 10px; font-weight: bold; }}
        .footer {{ margin-top: 20px; text-align: center; font-size: 10px; color: #666; padding-top: 8px; border-top: 1px solid #4D406E; }}
    </style>
</head>
<body>
    <div class="header">
        <h1>Test de Rendimiento de Imágenes en PDF</h1>
        <p><strong>Tipo:</strong> {description}</p>
        <p><strong>Cantidad:</strong> {count} imágenes | <strong>Layout:</strong> {columns} columnas | <strong>Estimado:</strong> {estimate}</p>
    </div>
    <div class="image-grid">{cells}
    </div>
    <div class="footer">
        <p>Generado con wkhtmltopdf | {generated_at}</p>
    </div>
</body>
</html>"#,
        columns = columns.count(),
        description = kind.description(),
        count = BENCHMARK_IMAGE_COUNT,
        estimate = kind.estimated_total(),
        cells = cells,
        generated_at = generated_at
    )
}
