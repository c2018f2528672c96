//! ViewerScreen - shows a generated PDF and copies it to the downloads folder.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::in_flight::InFlightGuard;
use crate::domain::form::GeneratedPdf;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::StoragePermission;

/// Name used for downloads when the route carries none.
pub const DEFAULT_DOWNLOAD_NAME: &str = "document.pdf";

const FILE_URI_PREFIX: &str = "file://";

/// Navigation state handed from the form screen to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRoute {
    pub uri: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl ViewerRoute {
    pub fn new(uri: impl Into<String>, file_name: Option<String>) -> Self {
        Self {
            uri: uri.into(),
            file_name,
        }
    }

    /// Filesystem path, without a `file://` scheme.
    pub fn local_path(&self) -> PathBuf {
        PathBuf::from(self.uri.strip_prefix(FILE_URI_PREFIX).unwrap_or(&self.uri))
    }

    /// Last path component of the route's file name, or the default.
    pub fn download_name(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).file_name())
            .and_then(|name| name.to_str())
            .unwrap_or(DEFAULT_DOWNLOAD_NAME)
            .to_string()
    }
}

impl From<GeneratedPdf> for ViewerRoute {
    fn from(pdf: GeneratedPdf) -> Self {
        Self {
            uri: pdf.file_path,
            file_name: Some(pdf.file_name),
        }
    }
}

/// PDF bytes ready to display.
#[derive(Debug, Clone)]
pub struct OpenedPdf {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Where a download landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedPdf {
    pub path: String,
    pub file_name: String,
}

/// Handler behind the viewer screen.
///
/// Only files that resolve inside the documents or downloads folder are
/// served or copied.
///
/// # Dependencies
///
/// - `StoragePermission`: gate for writing into the downloads folder
pub struct ViewerScreen {
    permission: Arc<dyn StoragePermission>,
    documents_dir: PathBuf,
    downloads_dir: PathBuf,
    guard: InFlightGuard,
}

impl ViewerScreen {
    pub fn new(
        permission: Arc<dyn StoragePermission>,
        documents_dir: impl Into<PathBuf>,
        downloads_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            permission,
            documents_dir: documents_dir.into(),
            downloads_dir: downloads_dir.into(),
            guard: InFlightGuard::new(),
        }
    }

    /// Load the PDF the route points at.
    pub async fn open(&self, route: &ViewerRoute) -> Result<OpenedPdf, DomainError> {
        if route.uri.trim().is_empty() {
            tracing::warn!("Viewer opened without a PDF uri");
            return Err(DomainError::new(ErrorCode::InvalidPdf, "PDF inválido"));
        }

        let path = self.resolve_source(route).await?;
        let bytes = read_pdf(&path).await?;

        Ok(OpenedPdf {
            file_name: route.download_name(),
            bytes,
        })
    }

    /// Copy the PDF into the downloads folder.
    ///
    /// Rejects a second download while one is running.
    pub async fn download(&self, route: &ViewerRoute) -> Result<DownloadedPdf, DomainError> {
        let _token = self.guard.begin("download")?;

        if route.uri.trim().is_empty() {
            return Err(DomainError::new(ErrorCode::InvalidPdf, "PDF inválido"));
        }

        if !self.permission.request_write_access().await.is_granted() {
            tracing::warn!(uri = %route.uri, "Storage permission denied, download aborted");
            return Err(DomainError::new(
                ErrorCode::PermissionDenied,
                "Permiso denegado: no se pudo guardar el PDF.",
            ));
        }

        let source = self.resolve_source(route).await?;

        let file_name = route.download_name();
        let target = self.downloads_dir.join(&file_name);

        tokio::fs::create_dir_all(&self.downloads_dir)
            .await
            .map_err(|e| download_failed(&target, e))?;

        // Copying a file onto itself truncates it.
        if tokio::fs::canonicalize(&target).await.ok().as_ref() == Some(&source) {
            tracing::info!(path = %source.display(), "PDF already in downloads");
            return Ok(DownloadedPdf {
                path: target.display().to_string(),
                file_name,
            });
        }

        tokio::fs::copy(&source, &target)
            .await
            .map_err(|e| download_failed(&target, e))?;

        tracing::info!(source = %source.display(), target = %target.display(), "PDF saved to downloads");
        Ok(DownloadedPdf {
            path: target.display().to_string(),
            file_name,
        })
    }

    pub fn is_downloading(&self) -> bool {
        self.guard.is_busy()
    }

    /// Canonical path of the route's file, if it lies inside an app folder.
    ///
    /// Missing files and paths outside both folders are reported the same
    /// way so callers cannot probe the host filesystem.
    async fn resolve_source(&self, route: &ViewerRoute) -> Result<PathBuf, DomainError> {
        let requested = route.local_path();
        let source = tokio::fs::canonicalize(&requested)
            .await
            .map_err(|_| not_found(&requested))?;

        for root in [&self.documents_dir, &self.downloads_dir] {
            if let Ok(root) = tokio::fs::canonicalize(root).await {
                if source.starts_with(&root) {
                    return Ok(source);
                }
            }
        }

        tracing::warn!(path = %requested.display(), "Rejected PDF outside the app folders");
        Err(not_found(&requested))
    }
}

async fn read_pdf(path: &Path) -> Result<Vec<u8>, DomainError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found(path)),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read PDF");
            Err(DomainError::new(ErrorCode::InternalError, "No se pudo cargar el PDF")
                .with_detail("cause", e.to_string()))
        }
    }
}

fn not_found(path: &Path) -> DomainError {
    tracing::warn!(path = %path.display(), "PDF not found");
    DomainError::new(ErrorCode::DocumentNotFound, "No se pudo cargar el PDF")
        .with_detail("path", path.display().to_string())
}

fn download_failed(target: &Path, e: std::io::Error) -> DomainError {
    tracing::error!(target = %target.display(), error = %e, "Failed to copy PDF to downloads");
    DomainError::new(ErrorCode::StorageError, "No se pudo descargar el PDF")
        .with_detail("cause", e.to_string())
}
