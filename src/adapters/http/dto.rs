//! HTTP DTOs for the screen endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{DownloadedPdf, ViewerRoute};
use crate::domain::benchmark::{BenchmarkComparison, BenchmarkResult, GridColumns, ImageKind};
use crate::domain::form::FormSubmission;
use crate::domain::foundation::DomainError;
use crate::ports::PdfBackendKind;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form values plus an optional output name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormRequest {
    #[serde(flatten)]
    pub values: FormSubmission,
    pub file_name: Option<String>,
}

/// Viewer navigation state, as query string or JSON body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRouteDto {
    #[serde(default)]
    pub uri: String,
    pub file_name: Option<String>,
}

impl From<ViewerRouteDto> for ViewerRoute {
    fn from(dto: ViewerRouteDto) -> Self {
        ViewerRoute::new(dto.uri, dto.file_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunBenchmarkRequest {
    pub image_type: ImageKind,
    #[serde(default)]
    pub columns: GridColumns,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Where the client should navigate after a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRouteResponse {
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl From<ViewerRoute> for ViewerRouteResponse {
    fn from(route: ViewerRoute) -> Self {
        Self {
            uri: route.uri,
            file_name: route.file_name,
        }
    }
}

/// Success toast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastResponse {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    #[serde(flatten)]
    pub download: DownloadedPdf,
    pub toast: ToastResponse,
}

impl From<DownloadedPdf> for DownloadResponse {
    fn from(download: DownloadedPdf) -> Self {
        let toast = ToastResponse {
            title: "PDF Guardado".to_string(),
            message: format!("Descargas: {}", download.file_name),
        };
        Self { download, toast }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResultsResponse {
    pub results: Vec<BenchmarkResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_result: Option<BenchmarkResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<BenchmarkComparison>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub pdf_backend: PdfBackendKind,
    pub converter_available: bool,
}

/// Error toast: `{code, message, details?}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = (!error.details.is_empty()).then(|| {
            serde_json::Value::Object(
                error
                    .details
                    .iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
                    .collect(),
            )
        });
        Self {
            code: error.code().to_string(),
            message: error.message().to_string(),
            details,
        }
    }
}
