//! Viewer screen endpoints.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::dto::{DownloadResponse, ErrorResponse, ViewerRouteDto};
use super::error::handle_domain_error;
use super::state::ApiState;
use crate::application::{ViewerRoute, DEFAULT_DOWNLOAD_NAME};

/// GET /api/viewer?uri=..&fileName=.. - the PDF bytes, inline
pub async fn view_pdf(State(state): State<ApiState>, Query(query): Query<ViewerRouteDto>) -> Response {
    let route = ViewerRoute::from(query);
    match state.viewer.open(&route).await {
        Ok(pdf) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    content_disposition(&pdf.file_name),
                ),
            ],
            pdf.bytes,
        )
            .into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/viewer/download - copy into the downloads folder
pub async fn download_pdf(
    State(state): State<ApiState>,
    payload: Result<Json<ViewerRouteDto>, JsonRejection>,
) -> Response {
    let route = match payload {
        Ok(Json(dto)) => ViewerRoute::from(dto),
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };

    match state.viewer.download(&route).await {
        Ok(download) => (StatusCode::OK, Json(DownloadResponse::from(download))).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// `inline` disposition with quotes, backslashes and control characters dropped.
fn content_disposition(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    let name = if cleaned.trim().is_empty() {
        DEFAULT_DOWNLOAD_NAME
    } else {
        cleaned.as_str()
    };
    format!("inline; filename=\"{}\"", name)
}

pub fn viewer_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(view_pdf))
        .route("/download", post(download_pdf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::http::state::test_support::{json_body, state_in};
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn write_pdf(dir: &TempDir) -> String {
        let documents = dir.path().join("documents");
        std::fs::create_dir_all(&documents).unwrap();
        let path = documents.join("report.pdf");
        std::fs::write(&path, b"%PDF-1.4 view").unwrap();
        path.display().to_string()
    }

    fn download_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/download")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn view_streams_pdf_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_pdf(&dir);
        let app = viewer_routes().with_state(state_in(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/?uri={}&fileName=report.pdf", path))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"%PDF-1.4 view");
    }

    #[tokio::test]
    async fn view_without_uri_is_invalid_pdf() {
        let dir = TempDir::new().unwrap();
        let app = viewer_routes().with_state(state_in(dir.path()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["message"], "PDF inválido");
    }

    #[tokio::test]
    async fn view_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = viewer_routes().with_state(state_in(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?uri=/nonexistent/x.pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn download_copies_and_returns_toast() {
        let dir = TempDir::new().unwrap();
        let path = write_pdf(&dir);
        let app = viewer_routes().with_state(state_in(dir.path()));

        let body = serde_json::json!({ "uri": path, "fileName": "Informe.pdf" }).to_string();
        let response = app.oneshot(download_request(body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["fileName"], "Informe.pdf");
        assert_eq!(json["toast"]["title"], "PDF Guardado");
        assert!(dir.path().join("downloads").join("Informe.pdf").exists());
    }

    #[test]
    fn content_disposition_strips_quotes_and_control_characters() {
        assert_eq!(
            content_disposition("a\"b\r\nSet-Cookie: x.pdf"),
            "inline; filename=\"abSet-Cookie: x.pdf\""
        );
        assert_eq!(content_disposition("\"\""), "inline; filename=\"document.pdf\"");
    }

    #[tokio::test]
    async fn view_with_quoted_file_name_still_serves_pdf() {
        let dir = TempDir::new().unwrap();
        let path = write_pdf(&dir);
        let app = viewer_routes().with_state(state_in(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/?uri={}&fileName=%22evil%22.pdf", path))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "inline; filename=\"evil.pdf\""
        );
    }

    #[tokio::test]
    async fn view_outside_app_folders_is_not_found() {
        let dir = TempDir::new().unwrap();
        let app = viewer_routes().with_state(state_in(dir.path()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/?uri=/etc/passwd")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
