//! Domain error to HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::domain::foundation::{DomainError, ErrorCode};

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed | ErrorCode::InvalidPdf => StatusCode::BAD_REQUEST,
        ErrorCode::PermissionDenied => StatusCode::FORBIDDEN,
        ErrorCode::AlreadyInProgress => StatusCode::CONFLICT,
        ErrorCode::DocumentNotFound | ErrorCode::AssetNotFound => StatusCode::NOT_FOUND,
        ErrorCode::GenerationFailed | ErrorCode::StorageError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Every domain error becomes an error toast with a matching status.
pub fn handle_domain_error(error: DomainError) -> Response {
    let status = status_for(error.code());
    if status.is_server_error() {
        tracing::error!(error = %error, details = ?error.details, "Request failed");
    } else {
        tracing::debug!(error = %error, "Request rejected");
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::InvalidPdf), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::PermissionDenied), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorCode::AlreadyInProgress), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::DocumentNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::AssetNotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        for code in [
            ErrorCode::GenerationFailed,
            ErrorCode::StorageError,
            ErrorCode::InternalError,
        ] {
            assert_eq!(status_for(code), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn response_uses_error_status() {
        let response =
            handle_domain_error(DomainError::new(ErrorCode::PermissionDenied, "Permiso denegado"));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
